//! Link store implementations.
//!
//! - [`PgLinkRepository`] - PostgreSQL via SQLx, schema in `migrations/`
//! - [`MemoryLinkRepository`] - in-process store used when no database is configured

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
