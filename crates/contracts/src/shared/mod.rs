pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod pagination;
pub mod serde_utils;
pub mod submit_guard;
