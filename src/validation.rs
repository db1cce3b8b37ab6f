//! Validation Rules
//!
//! Pure checks applied by the front ends before anything reaches the
//! store. The store itself does not depend on them.

use crate::error::{Result, RollbookError};
use crate::record::{NewStudent, StudentUpdate};

/// Lowest accepted mark
pub const MARKS_MIN: i64 = 0;

/// Highest accepted mark
pub const MARKS_MAX: i64 = 100;

/// Lowest roll number the text menu accepts
pub const ROLL_MIN: i64 = 1;

/// Trim `raw` and reject it if nothing is left
pub fn require<'a>(field: &'static str, raw: &'a str) -> Result<&'a str> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(RollbookError::MissingField(field));
    }
    Ok(value)
}

/// Parse `raw` as an integer
pub fn parse_int(field: &'static str, raw: &str) -> Result<i64> {
    let value = raw.trim();
    value.parse::<i64>().map_err(|_| RollbookError::InvalidFormat {
        field,
        value: value.to_string(),
    })
}

/// Check that marks lie in `MARKS_MIN..=MARKS_MAX`
pub fn check_marks(marks: i64) -> Result<i64> {
    if !(MARKS_MIN..=MARKS_MAX).contains(&marks) {
        return Err(RollbookError::OutOfRange {
            field: "Marks",
            value: marks,
            min: MARKS_MIN,
            max: MARKS_MAX,
        });
    }
    Ok(marks)
}

/// Required roll number
pub fn parse_roll_no(raw: &str) -> Result<i64> {
    parse_int("Roll", require("Roll", raw)?)
}

/// Optional marks: blank means absent, otherwise integer within bounds
pub fn parse_marks(raw: &str) -> Result<Option<i64>> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    check_marks(parse_int("Marks", value)?).map(Some)
}

/// Optional course: blank means absent
pub fn parse_course(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Validate raw form input for a new record
///
/// Checks run in order: required fields, integer parsing, range.
pub fn new_student(name: &str, roll_no: &str, course: &str, marks: &str) -> Result<NewStudent> {
    let name = require("Name", name)?;
    let roll_raw = require("Roll", roll_no)?;
    let roll_no = parse_int("Roll", roll_raw)?;
    let marks = parse_marks(marks)?;

    Ok(NewStudent {
        name: name.to_string(),
        roll_no,
        course: parse_course(course),
        marks,
    })
}

/// Validate raw form input for a partial update
///
/// Returns the target roll number and the fields to write.
pub fn student_update(roll_no: &str, course: &str, marks: &str) -> Result<(i64, StudentUpdate)> {
    let roll_no = parse_roll_no(roll_no)?;
    let marks = parse_marks(marks)?;
    Ok((roll_no, StudentUpdate::new(parse_course(course), marks)))
}
