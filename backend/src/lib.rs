//! Server-side adapters for the remote job portal REST API.

pub mod api;
pub mod http_utils;
pub mod server_extra;
