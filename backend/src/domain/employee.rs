//! Employee entity and its validated draft.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ports::Entity;
use super::validation::FieldViolations;

/// Persisted employee record.
///
/// ## Invariants
/// - `id` is assigned by the persistence layer, unique, and immutable.
/// - The remaining fields are non-blank; enforced by [`EmployeeDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Given name.
    #[schema(example = "Ada")]
    pub first_name: String,
    /// Family name.
    #[schema(example = "Lovelace")]
    pub last_name: String,
    /// Contact email address.
    #[schema(example = "ada@example.com")]
    pub email_id: String,
}

/// Validated mutable fields of an [`Employee`].
///
/// Constructing a draft is the single validation gate for employee input:
/// every field must be present and non-blank once trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    first_name: String,
    last_name: String,
    email_id: String,
}

impl EmployeeDraft {
    /// Validate and construct a draft. The error lists the violated JSON
    /// field names so clients see every problem at once.
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        email_id: Option<String>,
    ) -> Result<Self, FieldViolations> {
        let mut violations = FieldViolations::new();
        violations.require("firstName", first_name.as_deref());
        violations.require("lastName", last_name.as_deref());
        violations.require("emailId", email_id.as_deref());
        violations.into_result()?;
        Ok(Self {
            first_name: first_name.unwrap_or_default(),
            last_name: last_name.unwrap_or_default(),
            email_id: email_id.unwrap_or_default(),
        })
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Contact email address.
    pub fn email_id(&self) -> &str {
        &self.email_id
    }
}

impl Entity for Employee {
    type Draft = EmployeeDraft;

    const NAME: &'static str = "employee";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: &Self::Draft) -> Self {
        Self {
            id,
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email_id: draft.email_id.clone(),
        }
    }

    fn apply_draft(&mut self, draft: &Self::Draft) {
        self.first_name = draft.first_name.clone();
        self.last_name = draft.last_name.clone();
        self.email_id = draft.email_id.clone();
    }
}
