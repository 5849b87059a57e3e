//! Shared UI components.

pub mod layout;
pub mod snackbar;
