//! Student record types
//!
//! The single entity managed by the store, plus the inputs used to
//! create and partially update it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A persisted student row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Surrogate id assigned by the store, never reused
    pub id: i64,

    pub name: String,

    /// Business key, unique across the table and never changed after insert
    pub roll_no: i64,

    pub course: Option<String>,

    /// Always within 0..=100 when present
    pub marks: Option<i64>,
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Roll: {} | Course: {} | Marks: {}",
            self.id,
            self.name,
            self.roll_no,
            self.course.as_deref().unwrap_or("-"),
            self.marks
                .map(|m| m.to_string())
                .unwrap_or_else(|| "-".to_string()),
        )
    }
}

/// Fields for a new record; the id is assigned on insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub roll_no: i64,
    pub course: Option<String>,
    pub marks: Option<i64>,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, roll_no: i64) -> Self {
        Self {
            name: name.into(),
            roll_no,
            course: None,
            marks: None,
        }
    }

    pub fn course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    pub fn marks(mut self, marks: i64) -> Self {
        self.marks = Some(marks);
        self
    }
}

/// A partial update: only `Some` fields are written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    pub course: Option<String>,
    pub marks: Option<i64>,
}

impl StudentUpdate {
    pub fn new(course: Option<String>, marks: Option<i64>) -> Self {
        Self { course, marks }
    }

    /// True when neither field is supplied
    pub fn is_empty(&self) -> bool {
        self.course.is_none() && self.marks.is_none()
    }
}

/// Result of a partial update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The record existed and the supplied fields were written
    Updated,

    /// No record has that roll number
    NotFound,

    /// No fields were supplied, nothing was touched
    NothingToUpdate,
}

impl UpdateOutcome {
    /// Whether a record was changed
    pub fn is_updated(self) -> bool {
        self == UpdateOutcome::Updated
    }
}
