//! Core domain entities.
//!
//! - [`Link`] - a stored short link with its preview metadata
//! - [`NewLink`] - the insert payload for a link
//!
//! Links are write-once, so there is no patch/update type.

pub mod link;

pub use link::{DEFAULT_QUOTE, Link, NewLink};
