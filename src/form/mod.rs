//! Form Module
//!
//! Headless model of the form front end: text fields, action buttons,
//! and a searchable, sortable table of records.
//!
//! ## Layout Modelled
//! ```text
//! ┌──────────────────────┬──────────────────────────────────────────┐
//! │ Name   [          ]  │ Search [        ] (By Name) (By Roll)    │
//! │ Roll   [          ]  │ ┌────┬──────────┬──────┬────────┬──────┐ │
//! │ Course [          ]  │ │ ID │ Name     │ Roll │ Course │Marks │ │
//! │ Marks  [          ]  │ ├────┼──────────┼──────┼────────┼──────┤ │
//! │ (Add)                │ │    │          │      │        │      │ │
//! │ (Update)             │ └────┴──────────┴──────┴────────┴──────┘ │
//! │ (Delete)             │                                          │
//! └──────────────────────┴──────────────────────────────────────────┘
//! ```
//!
//! Actions validate input, call the store, and return a [`Notice`] the
//! host shows as a dialog. Selecting a row copies it into the fields.

mod controller;
mod notice;
mod table;

pub use controller::{FormController, FormFields};
pub use notice::{Notice, NoticeKind};
pub use table::{render_table, sort_records, Column, SortState};
