//! Observability for geoschool.
//!
//! Structured JSON logging only; the service deliberately carries no
//! metrics or tracing layer.

mod logger;

pub use logger::{Logger, Severity};
