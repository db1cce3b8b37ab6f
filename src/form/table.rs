//! Record table
//!
//! Column sorting and plain-text rendering of record rows.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::record::StudentRecord;

/// A table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Name,
    Roll,
    Course,
    Marks,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Id,
        Column::Name,
        Column::Roll,
        Column::Course,
        Column::Marks,
    ];

    /// Header text
    pub fn title(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Name => "Name",
            Column::Roll => "Roll",
            Column::Course => "Course",
            Column::Marks => "Marks",
        }
    }

    fn cell(self, record: &StudentRecord) -> String {
        match self {
            Column::Id => record.id.to_string(),
            Column::Name => record.name.clone(),
            Column::Roll => record.roll_no.to_string(),
            Column::Course => record.course.clone().unwrap_or_default(),
            Column::Marks => record.marks.map(|m| m.to_string()).unwrap_or_default(),
        }
    }

    fn compare(self, a: &StudentRecord, b: &StudentRecord) -> Ordering {
        match self {
            Column::Id => a.id.cmp(&b.id),
            Column::Name => a.name.cmp(&b.name),
            Column::Roll => a.roll_no.cmp(&b.roll_no),
            Column::Course => a.course.cmp(&b.course),
            Column::Marks => a.marks.cmp(&b.marks),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Column::Id),
            "name" => Ok(Column::Name),
            "roll" | "roll_no" | "rollno" => Ok(Column::Roll),
            "course" => Ok(Column::Course),
            "marks" => Ok(Column::Marks),
            other => Err(format!(
                "unknown column '{}', expected one of: id, name, roll, course, marks",
                other
            )),
        }
    }
}

/// Column the table is sorted by, and in which direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Column,
    pub descending: bool,
}

/// Stable sort of `rows` by one column
///
/// Absent course/marks sort before present ones when ascending.
pub fn sort_records(rows: &mut [StudentRecord], column: Column, descending: bool) {
    rows.sort_by(|a, b| {
        let ord = column.compare(a, b);
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
}

/// Render rows as an aligned text table with a header line
pub fn render_table(rows: &[StudentRecord]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| Column::ALL.iter().map(|c| c.cell(r)).collect())
        .collect();

    let widths: Vec<usize> = Column::ALL
        .iter()
        .enumerate()
        .map(|(i, c)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(c.title().len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<String> = Column::ALL.iter().map(|c| c.title().to_string()).collect();
    push_line(&mut out, &header, &widths);

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);

    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}
