//! Persistence ports implemented by outbound adapters.
//!
//! The two persisted resource families share one parametric port: an
//! [`Entity`] describes a record with a store-assigned integer identity and
//! its validated draft, and an [`EntityRepository`] exposes the find-all /
//! find-by-id / save / delete surface over one table of such records.

use async_trait::async_trait;

/// Persistence errors raised by repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceError {
    /// Repository connection could not be established.
    #[error("repository connection failed: {message}")]
    Connection {
        /// Adapter-level description of the failure.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("repository query failed: {message}")]
    Query {
        /// Adapter-level description of the failure.
        message: String,
    },
}

impl PersistenceError {
    /// Create a connection failure.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query failure.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// A persisted record with a stable, store-assigned integer identity.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Validated mutable fields used to create or overwrite a record.
    type Draft: Send + Sync;

    /// Resource name used in error messages.
    const NAME: &'static str;

    /// Store-assigned identifier, unique and immutable once assigned.
    fn id(&self) -> i32;

    /// Materialise a record once the store has assigned an identifier.
    fn from_draft(id: i32, draft: &Self::Draft) -> Self;

    /// Overwrite the mutable fields from a draft. The id never changes.
    fn apply_draft(&mut self, draft: &Self::Draft);
}

/// Find-all / find-by-id / save / delete over one entity table.
#[async_trait]
pub trait EntityRepository<E: Entity>: Send + Sync {
    /// Every persisted record, ascending id.
    async fn find_all(&self) -> Result<Vec<E>, PersistenceError>;

    /// Fetch one record by identifier.
    async fn find_by_id(&self, id: i32) -> Result<Option<E>, PersistenceError>;

    /// Persist a new record; the store assigns the identifier.
    async fn insert(&self, draft: &E::Draft) -> Result<E, PersistenceError>;

    /// Persist changes to an existing record, keyed by its identifier.
    async fn save(&self, entity: &E) -> Result<E, PersistenceError>;

    /// Remove a record permanently. Removing an absent id is a no-op.
    async fn delete(&self, id: i32) -> Result<(), PersistenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_accept_str_for_message_fields() {
        let err = PersistenceError::connection("refused");
        assert_eq!(err.to_string(), "repository connection failed: refused");

        let err = PersistenceError::query("syntax");
        assert_eq!(err.to_string(), "repository query failed: syntax");
    }
}
