//! Server-side access to the remote product search service.

pub mod api;
pub mod config;
