//! Record Store Module
//!
//! Persists student records in a single SQLite table.
//!
//! ## Responsibilities
//! - Create the table on startup (idempotent)
//! - Insert with roll-number uniqueness enforced by the database
//! - Full scan, point lookup and name filter, all ordered by roll number
//! - Partial update of course/marks and delete by roll number
//!
//! ## Table Layout
//! ```text
//! ┌─────────┬─────────┬────────────────────────────┐
//! │ column  │ type    │ constraint                 │
//! ├─────────┼─────────┼────────────────────────────┤
//! │ id      │ INTEGER │ PRIMARY KEY AUTOINCREMENT  │
//! │ name    │ TEXT    │ NOT NULL                   │
//! │ roll_no │ INTEGER │ UNIQUE NOT NULL            │
//! │ course  │ TEXT    │                            │
//! │ marks   │ INTEGER │                            │
//! └─────────┴─────────┴────────────────────────────┘
//! ```
//!
//! The store does not re-check marks bounds; that happens in
//! [`crate::validation`] before a call reaches it.

mod schema;
mod student_store;

pub use schema::TABLE_NAME;
pub use student_store::StudentStore;
