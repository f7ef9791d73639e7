//! geoschool - a distance-aware school directory service
//!
//! Clients register schools (name, address, coordinates) over HTTP and
//! query the full list sorted by great-circle distance from a supplied
//! location.

pub mod cli;
pub mod config;
pub mod geo;
pub mod http_server;
pub mod observability;
pub mod schools;
pub mod store;
