//! Domain layer containing business entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on infrastructure or presentation code.
//! Business rules (code generation, retry on collision, quote fallback) live in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
