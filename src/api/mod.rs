//! JSON API layer.
//!
//! Translates HTTP requests into [`LinkService`](crate::application::services::LinkService)
//! calls and formats responses as JSON.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and rate limiting layers
//! - [`routes`] - Route composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
