//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth` for the session lifecycle, `ui` for
//! transient notifications) so individual components can depend on small
//! focused models. Each state struct lives in an `RwSignal` provided via
//! context from `App`; only the functions in its own module write to it.

pub mod auth;
pub mod ui;
