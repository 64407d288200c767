//! Observability for the Trendify storefront.
//!
//! This crate provides:
//! - `SessionId` - Random identifier correlating all log lines of one page session
//! - `StructuredLogger` - Structured logging with session context
//! - `MemorySink` - Captured log output for tests and diagnostics

mod logging;
mod session;

pub use logging::*;
pub use session::SessionId;
