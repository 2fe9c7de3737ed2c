//! In-memory entity repositories.
//!
//! Used when no database is configured and as the backing store for
//! HTTP-level tests. Contents reset on process restart.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{Entity, EntityRepository, PersistenceError};

/// Mutex-guarded [`EntityRepository`] holding records in id order.
///
/// Identifiers come from a process-local counter, mirroring the serial
/// column of the database-backed adapters.
#[derive(Debug)]
pub struct MemoryEntityRepository<E> {
    rows: Mutex<Vec<E>>,
    next_id: AtomicI32,
}

impl<E> MemoryEntityRepository<E> {
    /// Create an empty repository whose first assigned id is 1.
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<E>> {
        // A poisoned lock only means another request panicked mid-mutation.
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E> Default for MemoryEntityRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for MemoryEntityRepository<E> {
    async fn find_all(&self) -> Result<Vec<E>, PersistenceError> {
        Ok(self.lock().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<E>, PersistenceError> {
        Ok(self.lock().iter().find(|row| row.id() == id).cloned())
    }

    async fn insert(&self, draft: &E::Draft) -> Result<E, PersistenceError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let entity = E::from_draft(id, draft);
        self.lock().push(entity.clone());
        Ok(entity)
    }

    async fn save(&self, entity: &E) -> Result<E, PersistenceError> {
        let mut rows = self.lock();
        match rows.iter_mut().find(|row| row.id() == entity.id()) {
            Some(row) => {
                *row = entity.clone();
                Ok(entity.clone())
            }
            None => Err(PersistenceError::query("record not found")),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), PersistenceError> {
        self.lock().retain(|row| row.id() != id);
        Ok(())
    }
}
