mod client;
pub mod dev_backend;
pub mod dto;
mod error;

pub use client::ApiClient;
pub use error::ApiError;
