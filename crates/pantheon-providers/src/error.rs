//! Provider error types.
//!
//! The error enum lives in `pantheon-core` so the engine, retry wrapper and
//! HTTP layer share one definition; it is re-exported here for backends.

pub use pantheon_core::error::ProviderError;
