//! Outbound adapters implementing domain ports for infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM.
//! - **memory**: process-local repositories used without a database and by
//!   the HTTP test suites.
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations; they contain no business logic.

pub mod memory;
pub mod persistence;
