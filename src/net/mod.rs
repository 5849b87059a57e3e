//! REST collaborator boundary: wire types, request helpers, and the
//! form-to-payload mapper.

pub mod api;
pub mod mapper;
pub mod types;
