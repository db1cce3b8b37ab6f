//! # Rollbook
//!
//! A small student records manager with:
//! - A single SQLite table keyed by a unique roll number
//! - Validation of required fields, integer input and marks bounds
//! - A text menu and a form view over the same store
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────┐      ┌──────────────────────┐
//! │      Text Menu       │      │      Form View       │
//! │  (prompt / re-ask)   │      │ (fields, table, sort)│
//! └──────────┬───────────┘      └──────────┬───────────┘
//!            │                             │
//!            └──────────────┬──────────────┘
//!                           ▼
//!               ┌───────────────────────┐
//!               │   Validation Rules    │
//!               └───────────┬───────────┘
//!                           ▼
//!               ┌───────────────────────┐
//!               │     Student Store     │
//!               │  (one SQLite handle)  │
//!               └───────────┬───────────┘
//!                           ▼
//!                     student.db file
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod validation;
pub mod menu;
pub mod form;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RollbookError};
pub use config::{Config, StoreLocation};
pub use record::{NewStudent, StudentRecord, StudentUpdate, UpdateOutcome};
pub use store::StudentStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Rollbook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
