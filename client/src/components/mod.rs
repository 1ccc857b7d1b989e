//! Reusable UI components shared across pages.

pub mod project_card;
pub mod toaster;
