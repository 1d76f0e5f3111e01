//! # Globepay Service
//!
//! Application services for the Globepay client.
//!
//! ## Layout
//!
//! - `service` - Transfer quote flow (live rate, fallback, stale-response guard)
//! - `session` - Explicit session object over a storage port
//! - `storage` - Session storage adapters (memory, JSON file)
//!
//! Services are generic over the port traits in `globepay-types`, so the
//! HTTP client and the storage backend are injected.

pub mod service;
pub mod session;
pub mod storage;


pub use service::{QuoteSequencer, QuoteService, QuoteTicket};
pub use session::Session;
pub use storage::{FileStorage, MemoryStorage};
