//! Menu session
//!
//! Drives one interactive session over any line reader and writer.

use std::io::{BufRead, Write};

use crate::error::{Result, RollbookError};
use crate::record::{NewStudent, StudentRecord, StudentUpdate, UpdateOutcome};
use crate::store::StudentStore;
use crate::validation::{self, MARKS_MAX, MARKS_MIN, ROLL_MIN};

use super::{Choice, MENU_TEXT};

/// Whether the loop keeps going after a choice
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// A bounded integer prompt that also accepts a blank line
enum OptionalInt {
    Value(i64),
    Blank,
}

/// One interactive menu session
///
/// Generic over the reader and writer so the binary can hand it stdin and
/// stdout while tests hand it in-memory buffers.
pub struct MenuSession<'a, R, W> {
    store: &'a StudentStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(store: &'a StudentStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run until the user exits or input is exhausted
    ///
    /// Only I/O failures on the session's own streams end the loop with an
    /// error; store failures are reported to the user.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", MENU_TEXT)?;

            let Some(line) = self.read_line("Choose (1-7): ")? else {
                tracing::debug!("Menu input closed");
                return Ok(());
            };

            let Some(choice) = Choice::parse(&line) else {
                writeln!(self.output, "Invalid choice, please try again.")?;
                continue;
            };

            tracing::trace!("Menu choice {:?}", choice);

            match self.handle(choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(RollbookError::Io(e)) => return Err(RollbookError::Io(e)),
                Err(e) => {
                    tracing::warn!("Menu action {:?} failed: {}", choice, e);
                    writeln!(self.output, "Error: {}", e)?;
                }
            }
        }
    }

    /// Take back the input and output (used by tests)
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn handle(&mut self, choice: Choice) -> Result<Flow> {
        match choice {
            Choice::Add => self.add(),
            Choice::ViewAll => self.view_all(),
            Choice::FindByRoll => self.find_by_roll(),
            Choice::SearchByName => self.search_by_name(),
            Choice::Update => self.update(),
            Choice::Delete => self.delete(),
            Choice::Exit => {
                writeln!(self.output, "Goodbye!")?;
                Ok(Flow::Exit)
            }
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn add(&mut self) -> Result<Flow> {
        let name = loop {
            let Some(line) = self.read_line("Enter name: ")? else {
                return Ok(Flow::Exit);
            };
            match validation::require("Name", &line) {
                Ok(name) => break name.to_string(),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        };

        let Some(roll_no) = self.prompt_int("Enter roll number: ", Some(ROLL_MIN), None)?
        else {
            return Ok(Flow::Exit);
        };

        let Some(course) = self.read_line("Enter course: ")? else {
            return Ok(Flow::Exit);
        };

        let marks_prompt = format!(
            "Enter marks ({}-{}, blank for none): ",
            MARKS_MIN, MARKS_MAX
        );
        let Some(marks) = self.prompt_optional_int(&marks_prompt, MARKS_MIN, MARKS_MAX)? else {
            return Ok(Flow::Exit);
        };

        let student = NewStudent {
            name,
            roll_no,
            course: validation::parse_course(&course),
            marks: match marks {
                OptionalInt::Value(m) => Some(m),
                OptionalInt::Blank => None,
            },
        };

        self.store.add(&student)?;
        writeln!(self.output, "Student added successfully!")?;
        Ok(Flow::Continue)
    }

    fn view_all(&mut self) -> Result<Flow> {
        let rows = self.store.list_all()?;
        if rows.is_empty() {
            writeln!(self.output, "No students found.")?;
        } else {
            self.print_rows("--- All Students ---", &rows)?;
        }
        Ok(Flow::Continue)
    }

    fn find_by_roll(&mut self) -> Result<Flow> {
        let Some(roll_no) =
            self.prompt_int("Enter roll number to search: ", Some(ROLL_MIN), None)?
        else {
            return Ok(Flow::Exit);
        };

        match self.store.find_by_roll(roll_no)? {
            Some(record) => writeln!(self.output, "Found -> {}", record)?,
            None => writeln!(self.output, "No student found with that roll number.")?,
        }
        Ok(Flow::Continue)
    }

    fn search_by_name(&mut self) -> Result<Flow> {
        let Some(query) = self.read_line("Enter full or partial name to search: ")? else {
            return Ok(Flow::Exit);
        };

        let rows = self.store.search_by_name(&query)?;
        if rows.is_empty() {
            writeln!(self.output, "No matching students found.")?;
        } else {
            self.print_rows(&format!("--- Search results for '{}' ---", query), &rows)?;
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> Result<Flow> {
        let Some(roll_no) =
            self.prompt_int("Enter roll number to update: ", Some(ROLL_MIN), None)?
        else {
            return Ok(Flow::Exit);
        };

        let Some(course) = self.read_line("Enter new course (blank to keep): ")? else {
            return Ok(Flow::Exit);
        };

        let marks_prompt = format!(
            "Enter new marks ({}-{}, blank to keep): ",
            MARKS_MIN, MARKS_MAX
        );
        let Some(marks) = self.prompt_optional_int(&marks_prompt, MARKS_MIN, MARKS_MAX)? else {
            return Ok(Flow::Exit);
        };

        let update = StudentUpdate::new(
            validation::parse_course(&course),
            match marks {
                OptionalInt::Value(m) => Some(m),
                OptionalInt::Blank => None,
            },
        );

        match self.store.update(roll_no, &update)? {
            UpdateOutcome::Updated => writeln!(self.output, "Student updated.")?,
            UpdateOutcome::NotFound => {
                writeln!(self.output, "No student found with that roll number.")?
            }
            UpdateOutcome::NothingToUpdate => writeln!(self.output, "Nothing to update.")?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let Some(roll_no) =
            self.prompt_int("Enter roll number to delete: ", Some(ROLL_MIN), None)?
        else {
            return Ok(Flow::Exit);
        };

        let prompt = format!("Delete student with roll {}? (y/n): ", roll_no);
        let Some(answer) = self.read_line(&prompt)? else {
            return Ok(Flow::Exit);
        };

        if !matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes") {
            writeln!(self.output, "Delete cancelled.")?;
            return Ok(Flow::Continue);
        }

        if self.store.delete(roll_no)? {
            writeln!(self.output, "Student deleted.")?;
        } else {
            writeln!(self.output, "No student found with that roll number.")?;
        }
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Prompt Helpers
    // =========================================================================

    /// Print `prompt` and read one trimmed line; `None` on EOF
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // Raw bytes: a line that is not UTF-8 becomes an invalid entry, not an I/O error
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&raw).trim().to_string()))
    }

    /// Re-prompt until an integer within bounds is entered; `None` on EOF
    fn prompt_int(
        &mut self,
        prompt: &str,
        min: Option<i64>,
        max: Option<i64>,
    ) -> Result<Option<i64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            if let Some(value) = self.check_int(&line, min, max)? {
                return Ok(Some(value));
            }
        }
    }

    /// Like `prompt_int`, but a blank line is an accepted answer
    fn prompt_optional_int(
        &mut self,
        prompt: &str,
        min: i64,
        max: i64,
    ) -> Result<Option<OptionalInt>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(Some(OptionalInt::Blank));
            }
            if let Some(value) = self.check_int(&line, Some(min), Some(max))? {
                return Ok(Some(OptionalInt::Value(value)));
            }
        }
    }

    /// Parse and bound-check, printing the reason on rejection
    fn check_int(
        &mut self,
        line: &str,
        min: Option<i64>,
        max: Option<i64>,
    ) -> Result<Option<i64>> {
        let Ok(value) = line.parse::<i64>() else {
            writeln!(self.output, "Please enter a valid integer.")?;
            return Ok(None);
        };
        if let Some(min) = min {
            if value < min {
                writeln!(self.output, "Enter a value >= {}", min)?;
                return Ok(None);
            }
        }
        if let Some(max) = max {
            if value > max {
                writeln!(self.output, "Enter a value <= {}", max)?;
                return Ok(None);
            }
        }
        Ok(Some(value))
    }

    fn print_rows(&mut self, header: &str, rows: &[StudentRecord]) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", header)?;
        for row in rows {
            writeln!(self.output, "{}", row)?;
        }
        writeln!(self.output, "{}", "-".repeat(header.chars().count()))?;
        Ok(())
    }
}
