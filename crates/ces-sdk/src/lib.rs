/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public CES client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Client for the Crypto Exchange Standard (CES) API, which correlates
//! coins, networks and tickers across cryptocurrency exchanges.

pub mod http;
pub mod types;
pub mod validate;

// Re-export commonly used types from http
pub use http::{
    API_KEY_HEADER,
    CesClient,
    CesError,
    ClientConfig,
    CorrelateRequest,
    DEFAULT_BASE_URL,
    Result,
    cancellable,
};

// Re-export all types
pub use types::*;

pub use validate::{InputError, Operation, Slot, Validate};

pub use uuid::Uuid;
