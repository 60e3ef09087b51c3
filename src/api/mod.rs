//! HTTP access to the REST collaborator.

mod client;
mod error;

pub use client::{build_http_client, ResourceClient};
pub use error::ApiError;
