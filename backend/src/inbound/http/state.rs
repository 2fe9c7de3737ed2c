//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::EntityRepository;
use crate::domain::{Employee, Item, LocalItemStore};

/// Dependency bundle for HTTP handlers.
///
/// The local-item store is a single process-wide sequence shared by every
/// handler rather than one list per resource family.
#[derive(Clone)]
pub struct HttpState {
    /// Employee persistence port.
    pub employees: Arc<dyn EntityRepository<Employee>>,
    /// Item persistence port.
    pub items: Arc<dyn EntityRepository<Item>>,
    /// Shared scratch list; reset on process restart, never persisted.
    pub local_items: Arc<LocalItemStore>,
}

impl HttpState {
    /// Construct state from the two entity ports with a fresh local-item
    /// store.
    pub fn new(
        employees: Arc<dyn EntityRepository<Employee>>,
        items: Arc<dyn EntityRepository<Item>>,
    ) -> Self {
        Self {
            employees,
            items,
            local_items: Arc::new(LocalItemStore::new()),
        }
    }
}
