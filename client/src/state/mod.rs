//! Shared client state provided through Leptos context.
//!
//! DESIGN
//! ======
//! `session` wires the core session store to browser `localStorage` and
//! builds gateways for pages; `toast` holds the notification queue.

pub mod session;
pub mod toast;
