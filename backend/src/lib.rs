//! Backend library modules.
//!
//! CRUD over two persisted entity families (employees, items) backed by a
//! relational store, plus an ephemeral in-memory local-item list, exposed
//! as a REST API.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
