//! Form controller
//!
//! Holds the form state and turns button presses into store calls.

use crate::error::RollbookError;
use crate::record::{StudentRecord, UpdateOutcome};
use crate::store::StudentStore;
use crate::validation;

use super::{sort_records, Column, Notice, SortState};

const INPUT_ERROR: &str = "Input error";

/// Raw text of the form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub roll_no: String,
    pub course: String,
    pub marks: String,

    /// Search box above the table
    pub search: String,
}

/// State behind the form view
///
/// ## Refresh Rules
/// - A successful add/update/delete clears the inputs and reloads all rows
/// - Searches replace the rows with their matches
/// - Rows always follow the active sort, if one was chosen
pub struct FormController<'a> {
    store: &'a StudentStore,

    /// Current text of the inputs
    pub fields: FormFields,

    /// Rows currently shown in the table
    rows: Vec<StudentRecord>,

    sort: Option<SortState>,
}

impl<'a> FormController<'a> {
    /// Create a controller and load every record into the table
    pub fn new(store: &'a StudentStore) -> crate::Result<Self> {
        let mut controller = Self {
            store,
            fields: FormFields::default(),
            rows: Vec::new(),
            sort: None,
        };
        controller.load(store.list_all()?);
        Ok(controller)
    }

    // =========================================================================
    // Buttons
    // =========================================================================

    /// "Add Student"
    pub fn add(&mut self) -> Notice {
        let student = match validation::new_student(
            &self.fields.name,
            &self.fields.roll_no,
            &self.fields.course,
            &self.fields.marks,
        ) {
            Ok(student) => student,
            Err(e) => return Notice::warning(INPUT_ERROR, e.to_string()),
        };

        match self.store.add(&student) {
            Ok(_) => self.after_change(Notice::info("Success", "Student added.")),
            Err(e) => Notice::error("Error", e.to_string()),
        }
    }

    /// "Update Student"
    ///
    /// Blank course or marks keep the stored value.
    pub fn update(&mut self) -> Notice {
        let (roll_no, update) = match validation::student_update(
            &self.fields.roll_no,
            &self.fields.course,
            &self.fields.marks,
        ) {
            Ok(parsed) => parsed,
            Err(RollbookError::MissingField(_)) => {
                return Notice::warning(INPUT_ERROR, "Enter roll to update.")
            }
            Err(e) => return Notice::warning(INPUT_ERROR, e.to_string()),
        };

        match self.store.update(roll_no, &update) {
            Ok(UpdateOutcome::Updated) => {
                self.after_change(Notice::info("Success", "Student updated."))
            }
            Ok(UpdateOutcome::NotFound) => {
                Notice::error("Error", RollbookError::NotFound { roll_no }.to_string())
            }
            Ok(UpdateOutcome::NothingToUpdate) => {
                Notice::info("Nothing to update", "Enter a course or marks to change.")
            }
            Err(e) => Notice::error("Error", e.to_string()),
        }
    }

    /// "Delete Student"
    ///
    /// `confirm` is asked with the roll number before anything is removed;
    /// declining returns `None`.
    pub fn delete(&mut self, confirm: impl FnOnce(i64) -> bool) -> Option<Notice> {
        let roll_no = match validation::parse_roll_no(&self.fields.roll_no) {
            Ok(roll_no) => roll_no,
            Err(RollbookError::MissingField(_)) => {
                return Some(Notice::warning(INPUT_ERROR, "Enter roll to delete."))
            }
            Err(e) => return Some(Notice::warning(INPUT_ERROR, e.to_string())),
        };

        if !confirm(roll_no) {
            return None;
        }

        Some(match self.store.delete(roll_no) {
            Ok(true) => self.after_change(Notice::info("Deleted", "Student deleted.")),
            Ok(false) => Notice::error("Error", RollbookError::NotFound { roll_no }.to_string()),
            Err(e) => Notice::error("Error", e.to_string()),
        })
    }

    /// "By Name": show rows whose name contains the search text
    pub fn search_by_name(&mut self) -> Option<Notice> {
        let query = self.fields.search.trim().to_string();
        if query.is_empty() {
            return Some(Notice::warning("Input", "Enter name or part of name to search."));
        }

        match self.store.search_by_name(&query) {
            Ok(rows) => {
                self.load(rows);
                None
            }
            Err(e) => Some(Notice::error("Error", e.to_string())),
        }
    }

    /// "By Roll": show the single row with the searched roll number
    pub fn search_by_roll(&mut self) -> Option<Notice> {
        let roll_no = match validation::parse_roll_no(&self.fields.search) {
            Ok(roll_no) => roll_no,
            Err(RollbookError::MissingField(_)) => {
                return Some(Notice::warning("Input", "Enter roll number to search."))
            }
            Err(e) => return Some(Notice::warning("Input", e.to_string())),
        };

        match self.store.find_by_roll(roll_no) {
            Ok(found) => {
                self.load(found.into_iter().collect());
                None
            }
            Err(e) => Some(Notice::error("Error", e.to_string())),
        }
    }

    /// "Refresh All"
    pub fn refresh(&mut self) -> Option<Notice> {
        match self.store.list_all() {
            Ok(rows) => {
                self.load(rows);
                None
            }
            Err(e) => Some(Notice::error("Error", e.to_string())),
        }
    }

    // =========================================================================
    // Table
    // =========================================================================

    /// Copy the row at `index` into the inputs; false if out of range
    pub fn select(&mut self, index: usize) -> bool {
        let Some(record) = self.rows.get(index) else {
            return false;
        };

        self.fields.name = record.name.clone();
        self.fields.roll_no = record.roll_no.to_string();
        self.fields.course = record.course.clone().unwrap_or_default();
        self.fields.marks = record.marks.map(|m| m.to_string()).unwrap_or_default();
        true
    }

    /// Sort by `column`; choosing the active column again flips direction
    pub fn sort_by(&mut self, column: Column) {
        let descending = match self.sort {
            Some(state) if state.column == column => !state.descending,
            _ => false,
        };
        self.sort = Some(SortState { column, descending });
        sort_records(&mut self.rows, column, descending);
    }

    /// Empty the inputs (the search box is kept)
    pub fn clear(&mut self) {
        let search = std::mem::take(&mut self.fields.search);
        self.fields = FormFields {
            search,
            ..FormFields::default()
        };
    }

    pub fn rows(&self) -> &[StudentRecord] {
        &self.rows
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    fn load(&mut self, mut rows: Vec<StudentRecord>) {
        if let Some(state) = self.sort {
            sort_records(&mut rows, state.column, state.descending);
        }
        self.rows = rows;
    }

    fn after_change(&mut self, success: Notice) -> Notice {
        self.clear();
        match self.refresh() {
            Some(failed) => failed,
            None => success,
        }
    }
}
