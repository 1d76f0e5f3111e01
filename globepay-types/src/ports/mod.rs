//! Port traits (interfaces for adapters).
//!
//! The services in `globepay-service` depend on these traits, not on the HTTP
//! client or a concrete storage backend.

mod rates;
mod storage;

pub use rates::{GatewayError, RateGateway, RateQuote};
pub use storage::{SessionStorage, StorageError};
