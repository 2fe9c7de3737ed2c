//! Internal Diesel row structs for database operations.
//!
//! Implementation details of the persistence layer, never exposed to the
//! domain. They exist solely to satisfy Diesel's type requirements for
//! queries and mutations.

use diesel::prelude::*;

use crate::domain::{Employee, EmployeeDraft, Item, ItemDraft};

use super::schema::{employees, items};

/// Row struct for reading from the employees table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email_id: String,
}

impl EmployeeRow {
    pub(crate) fn into_domain(self) -> Employee {
        Employee {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email_id: self.email_id,
        }
    }
}

/// Insertable struct for creating new employee records; the database
/// assigns the id.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email_id: &'a str,
}

impl<'a> NewEmployeeRow<'a> {
    pub(crate) fn from_draft(draft: &'a EmployeeDraft) -> Self {
        Self {
            first_name: draft.first_name(),
            last_name: draft.last_name(),
            email_id: draft.email_id(),
        }
    }
}

/// Changeset struct for updating existing employee records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeChangeset<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email_id: &'a str,
}

/// Row struct for reading from the items table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ItemRow {
    pub id: i32,
    pub title: String,
    pub content: String,
}

impl ItemRow {
    pub(crate) fn into_domain(self) -> Item {
        Item {
            id: self.id,
            title: self.title,
            content: self.content,
        }
    }
}

/// Insertable struct for creating new item records; the database assigns
/// the id.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = items)]
pub(crate) struct NewItemRow<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

impl<'a> NewItemRow<'a> {
    pub(crate) fn from_draft(draft: &'a ItemDraft) -> Self {
        Self {
            title: draft.title(),
            content: draft.content(),
        }
    }
}

/// Changeset struct for updating existing item records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = items)]
pub(crate) struct ItemChangeset<'a> {
    pub title: &'a str,
    pub content: &'a str,
}
