//! Domain types and ports.
//!
//! Purpose: define the transport-agnostic core — entity records, their
//! validated drafts, the shared local-item sequence, the error envelope,
//! and the persistence ports implemented by outbound adapters. Keep
//! invariants and serialisation contracts (serde) documented on each type.

pub mod employee;
pub mod error;
pub mod item;
pub mod local_items;
pub mod ports;
pub mod validation;

pub use self::employee::{Employee, EmployeeDraft};
pub use self::error::{Error, ErrorCode};
pub use self::item::{Item, ItemDraft};
pub use self::local_items::{LocalItem, LocalItemStore, PositionOutOfRange};
pub use self::validation::FieldViolations;
