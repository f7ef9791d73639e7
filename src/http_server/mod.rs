//! HTTP server for the school directory API.
//!
//! Route groups follow the one-file-per-concern layout: `school_routes`
//! carries the two public endpoints, `server` assembles the router and
//! owns the listening loop.

mod config;
mod errors;
mod school_routes;
mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use school_routes::{school_routes, AddSchoolResponse, SchoolState};
pub use server::HttpServer;
