//! SQL statements for the students table

/// Name of the single table
pub const TABLE_NAME: &str = "students";

pub(crate) const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS students (
        id      INTEGER PRIMARY KEY AUTOINCREMENT,
        name    TEXT NOT NULL,
        roll_no INTEGER UNIQUE NOT NULL,
        course  TEXT,
        marks   INTEGER
    );";

pub(crate) const INSERT: &str =
    "INSERT INTO students (name, roll_no, course, marks) VALUES (?1, ?2, ?3, ?4)";

pub(crate) const SELECT_ALL: &str =
    "SELECT id, name, roll_no, course, marks FROM students ORDER BY roll_no";

pub(crate) const SELECT_BY_ROLL: &str =
    "SELECT id, name, roll_no, course, marks FROM students WHERE roll_no = ?1";

// instr() is byte-exact, so the match is case-sensitive and '' matches every row.
pub(crate) const SELECT_BY_NAME: &str =
    "SELECT id, name, roll_no, course, marks FROM students \
     WHERE instr(name, ?1) > 0 ORDER BY roll_no";

// NULL parameters keep the stored value.
pub(crate) const UPDATE_PARTIAL: &str =
    "UPDATE students SET course = COALESCE(?1, course), marks = COALESCE(?2, marks) \
     WHERE roll_no = ?3";

pub(crate) const DELETE_BY_ROLL: &str = "DELETE FROM students WHERE roll_no = ?1";

pub(crate) const COUNT: &str = "SELECT COUNT(*) FROM students";
