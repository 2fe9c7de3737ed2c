//! Field-presence validation for entity drafts.
//!
//! Required string fields must be present and non-blank once trimmed.
//! Violations accumulate so a rejected payload reports every offending
//! field at once rather than the first one found.

use std::fmt;

/// Accumulates the JSON field names that failed validation.
///
/// # Examples
/// ```
/// use backend::domain::FieldViolations;
///
/// let mut violations = FieldViolations::new();
/// violations.require("title", Some("  "));
/// violations.require("content", Some("body"));
/// assert_eq!(violations.fields(), ["title"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldViolations {
    fields: Vec<&'static str>,
}

impl FieldViolations {
    /// Start with no violations recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `field` as violated when `value` is absent or blank.
    pub fn require(&mut self, field: &'static str, value: Option<&str>) {
        match value {
            Some(value) if !value.trim().is_empty() => {}
            _ => self.fields.push(field),
        }
    }

    /// Violated JSON field names, in declaration order.
    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }

    /// Ok when nothing was violated, otherwise the violations as the error.
    pub fn into_result(self) -> Result<(), Self> {
        if self.fields.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing or blank fields: {}", self.fields.join(", "))
    }
}

impl std::error::Error for FieldViolations {}
