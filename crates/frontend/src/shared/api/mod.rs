pub mod client;
pub mod crud;
pub mod error;
pub mod transport;

#[cfg(test)]
pub mod testing;

pub use client::{ApiClient, ApiResult};
pub use error::ApiError;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
