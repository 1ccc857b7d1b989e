//! # projectflow-client
//!
//! Leptos single-page frontend for ProjectFlow.
//!
//! Pages talk to the backend only through `projectflow::Gateway`, and every
//! route is wrapped in the `Guarded` component so access decisions come from
//! `projectflow::path_access`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
