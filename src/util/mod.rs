//! Browser utility modules: localStorage persistence and file reading.

pub mod file;
pub mod session_store;
