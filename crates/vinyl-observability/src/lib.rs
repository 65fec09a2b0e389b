//! Observability for storefront sessions.
//!
//! This crate provides:
//! - `StructuredLogger` - JSON or human log lines tagged with the session id
//! - `LoggingSink` - a notification sink that logs every toast before forwarding it

mod logging;
mod sink;

pub use logging::*;
pub use sink::*;

// Re-export SessionId from vinyl-commerce for convenience
pub use vinyl_commerce::SessionId;
