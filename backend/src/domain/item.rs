//! Item entity and its validated draft.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ports::Entity;
use super::validation::FieldViolations;

/// Persisted item record. Same lifecycle shape as an employee: the store
/// assigns the id, updates overwrite only title and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Short label.
    #[schema(example = "groceries")]
    pub title: String,
    /// Free-form body.
    #[schema(example = "milk, eggs")]
    pub content: String,
}

/// Validated mutable fields of an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    title: String,
    content: String,
}

impl ItemDraft {
    /// Validate and construct a draft; both fields must be present and
    /// non-blank. The error lists the violated JSON field names.
    pub fn new(title: Option<String>, content: Option<String>) -> Result<Self, FieldViolations> {
        let mut violations = FieldViolations::new();
        violations.require("title", title.as_deref());
        violations.require("content", content.as_deref());
        violations.into_result()?;
        Ok(Self {
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
        })
    }

    /// Short label.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free-form body.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Entity for Item {
    type Draft = ItemDraft;

    const NAME: &'static str = "item";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: &Self::Draft) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            content: draft.content.clone(),
        }
    }

    fn apply_draft(&mut self, draft: &Self::Draft) {
        self.title = draft.title.clone();
        self.content = draft.content.clone();
    }
}
