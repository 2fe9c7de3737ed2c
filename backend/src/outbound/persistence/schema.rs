//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly; Diesel
//! uses them for compile-time query validation and type-safe SQL
//! generation. Regenerate with `diesel print-schema` when the schema
//! changes.

diesel::table! {
    /// Employee records.
    ///
    /// The `id` column is a serial primary key assigned by the database.
    employees (id) {
        /// Primary key, assigned on insert.
        id -> Int4,
        /// Given name.
        first_name -> Varchar,
        /// Family name.
        last_name -> Varchar,
        /// Contact email address.
        email_id -> Varchar,
    }
}

diesel::table! {
    /// Item records.
    ///
    /// The `id` column is a serial primary key assigned by the database.
    items (id) {
        /// Primary key, assigned on insert.
        id -> Int4,
        /// Short label.
        title -> Varchar,
        /// Free-form body.
        content -> Varchar,
    }
}
