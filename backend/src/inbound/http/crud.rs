//! Generic CRUD handler core shared by the employee and item resources.
//!
//! The two persisted resource families are structurally identical, so the
//! verb-to-port translation is written once over the [`EntityRepository`]
//! port and the per-resource handlers stay thin.

use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::{Entity, EntityRepository, PersistenceError};
use crate::domain::{Error, FieldViolations};

/// Fixed acknowledgement payload returned by entity deletion. The deleted
/// record itself is never echoed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeletionAck {
    /// Always `true` on success.
    #[schema(example = true)]
    pub deleted: bool,
}

impl DeletionAck {
    pub(crate) const fn acknowledged() -> Self {
        Self { deleted: true }
    }
}

/// Map port failures onto the error envelope: unreachable repositories are
/// reported as 503, failed queries as 500.
pub(crate) fn map_persistence_error(error: PersistenceError) -> Error {
    match error {
        PersistenceError::Connection { message } => Error::service_unavailable(message),
        PersistenceError::Query { message } => Error::internal(message),
    }
}

/// Map a rejected payload onto a 400 enumerating the violated field names.
pub(crate) fn map_field_violations(violations: FieldViolations) -> Error {
    let fields = violations.fields().to_vec();
    Error::invalid_request(violations.to_string()).with_details(json!({ "fields": fields }))
}

fn missing(name: &str, id: i32) -> Error {
    Error::not_found(format!("{name} not found for id {id}"))
}

/// Every persisted record, store order.
pub(crate) async fn list_all<E: Entity>(repo: &dyn EntityRepository<E>) -> Result<Vec<E>, Error> {
    repo.find_all().await.map_err(map_persistence_error)
}

/// One record or 404.
pub(crate) async fn fetch<E: Entity>(
    repo: &dyn EntityRepository<E>,
    id: i32,
) -> Result<E, Error> {
    repo.find_by_id(id)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| missing(E::NAME, id))
}

/// Persist a validated draft; the store assigns the id.
pub(crate) async fn create<E: Entity>(
    repo: &dyn EntityRepository<E>,
    draft: E::Draft,
) -> Result<E, Error> {
    repo.insert(&draft).await.map_err(map_persistence_error)
}

/// Overwrite the mutable fields of an existing record, or 404.
pub(crate) async fn update<E: Entity>(
    repo: &dyn EntityRepository<E>,
    id: i32,
    draft: E::Draft,
) -> Result<E, Error> {
    let mut entity = fetch(repo, id).await?;
    entity.apply_draft(&draft);
    repo.save(&entity).await.map_err(map_persistence_error)
}

/// Remove an existing record, or 404.
pub(crate) async fn remove<E: Entity>(
    repo: &dyn EntityRepository<E>,
    id: i32,
) -> Result<DeletionAck, Error> {
    fetch(repo, id).await?;
    repo.delete(id).await.map_err(map_persistence_error)?;
    Ok(DeletionAck::acknowledged())
}

#[cfg(test)]
mod tests {
    //! Coverage for port-failure mapping through the generic core.

    use async_trait::async_trait;
    use rstest::rstest;

    use super::*;
    use crate::domain::{Employee, ErrorCode};

    /// Repository double that fails every call with a fixed error.
    struct FailingRepository(PersistenceError);

    #[async_trait]
    impl EntityRepository<Employee> for FailingRepository {
        async fn find_all(&self) -> Result<Vec<Employee>, PersistenceError> {
            Err(self.0.clone())
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<Employee>, PersistenceError> {
            Err(self.0.clone())
        }

        async fn insert(&self, _draft: &<Employee as Entity>::Draft) -> Result<Employee, PersistenceError> {
            Err(self.0.clone())
        }

        async fn save(&self, _entity: &Employee) -> Result<Employee, PersistenceError> {
            Err(self.0.clone())
        }

        async fn delete(&self, _id: i32) -> Result<(), PersistenceError> {
            Err(self.0.clone())
        }
    }

    /// Repository double whose table is always empty.
    struct EmptyRepository;

    #[async_trait]
    impl EntityRepository<Employee> for EmptyRepository {
        async fn find_all(&self) -> Result<Vec<Employee>, PersistenceError> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<Employee>, PersistenceError> {
            Ok(None)
        }

        async fn insert(&self, _draft: &<Employee as Entity>::Draft) -> Result<Employee, PersistenceError> {
            Err(PersistenceError::query("unused"))
        }

        async fn save(&self, _entity: &Employee) -> Result<Employee, PersistenceError> {
            Err(PersistenceError::query("unused"))
        }

        async fn delete(&self, _id: i32) -> Result<(), PersistenceError> {
            Ok(())
        }
    }

    #[rstest]
    #[case(PersistenceError::connection("down"), ErrorCode::ServiceUnavailable)]
    #[case(PersistenceError::query("bad sql"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn port_failures_map_to_envelope_codes(
        #[case] failure: PersistenceError,
        #[case] expected: ErrorCode,
    ) {
        let repo = FailingRepository(failure);
        let err = list_all(&repo).await.expect_err("failure propagates");
        assert_eq!(err.code, expected);
    }

    #[tokio::test]
    async fn fetch_update_and_remove_miss_with_not_found() {
        let repo = EmptyRepository;

        let err = fetch(&repo, 42).await.expect_err("absent id");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "employee not found for id 42");

        let draft = crate::domain::EmployeeDraft::new(
            Some("A".to_owned()),
            Some("B".to_owned()),
            Some("a@b.com".to_owned()),
        )
        .expect("valid draft");
        let err = update(&repo, 42, draft).await.expect_err("absent id");
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = remove(&repo, 42).await.expect_err("absent id");
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn field_violations_surface_the_field_list() {
        let mut violations = FieldViolations::new();
        violations.require("firstName", None);
        let err = map_field_violations(violations);
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        let details = err.details.expect("details present");
        assert_eq!(details["fields"][0], "firstName");
    }
}
