//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the entity repository ports backed by
//! PostgreSQL via Diesel, with async support through `diesel-async` and
//! `bb8` connection pooling.
//!
//! Principles:
//!
//! - **Thin adapters**: repositories only translate between Diesel row
//!   structs and domain types; no business logic lives here.
//! - **Internal models**: row structs (`models.rs`) and schema definitions
//!   (`schema.rs`) never leak to the domain layer.
//! - **Strongly typed errors**: database failures map to
//!   [`PersistenceError`](crate::domain::ports::PersistenceError).

mod diesel_employee_repository;
mod diesel_error_mapping;
mod diesel_item_repository;
mod models;
mod pool;
mod schema;

pub use diesel_employee_repository::DieselEmployeeRepository;
pub use diesel_item_repository::DieselItemRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
