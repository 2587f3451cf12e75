/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod correlate;
pub mod error;
pub mod exchange;

pub use error::{CesError, Result};

pub use client::{API_KEY_HEADER, CesClient, ClientConfig, DEFAULT_BASE_URL, cancellable};
pub use correlate::CorrelateRequest;
