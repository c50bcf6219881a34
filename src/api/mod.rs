//! API module for HTTP endpoints
//!
//! This module provides the REST API the site front end calls for search,
//! suggestions and item lookups.

pub mod http;
pub mod rest;
pub mod state;

pub use http::{create_router, serve};
pub use state::AppState;
