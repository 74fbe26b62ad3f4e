//! Utility functions for code generation, URL handling, and storage errors.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - Target URL validation
//! - [`base_url`] - Short URL construction from configuration or request headers
//! - [`db_error`] - Database error classification

pub mod base_url;
pub mod code_generator;
pub mod db_error;
pub mod url_validator;
