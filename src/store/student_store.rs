//! Student Store
//!
//! SQLite-backed CRUD over the students table.

use std::fs;
use std::time::Duration;

use parking_lot::Mutex;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

use crate::config::{Config, StoreLocation};
use crate::error::{Result, RollbookError};
use crate::record::{NewStudent, StudentRecord, StudentUpdate, UpdateOutcome};

use super::schema;

/// Handle to the student table
///
/// ## Resource Model
/// - One connection per store, owned by the caller and passed to adapters
/// - Every operation locks the connection for exactly one statement and
///   releases it when the guard drops, on success and error paths alike
/// - Statements run in autocommit mode, so each operation is atomic
pub struct StudentStore {
    /// The open connection
    conn: Mutex<Connection>,
}

impl StudentStore {
    /// Open or create a store with the given config
    ///
    /// On startup:
    /// 1. Create the parent directory of the database file if needed
    /// 2. Open the connection and apply the busy timeout
    /// 3. Ensure the students table exists
    pub fn open(config: Config) -> Result<Self> {
        let conn = match config.location {
            StoreLocation::File(path) => {
                if path.as_os_str().is_empty() {
                    return Err(RollbookError::Config("database path is empty".to_string()));
                }
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                tracing::info!("Opening student store at {}", path.display());
                Connection::open(path)?
            }
            StoreLocation::Memory => {
                tracing::info!("Opening in-memory student store");
                Connection::open_in_memory()?
            }
        };

        conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))?;

        let store = Self {
            conn: Mutex::new(conn),
        };
        store.initialize()?;

        Ok(store)
    }

    /// Open an in-memory store (convenience method)
    pub fn open_in_memory() -> Result<Self> {
        Self::open(Config::builder().in_memory().build())
    }

    /// Ensure the students table exists
    ///
    /// Idempotent; safe to call on every startup.
    pub fn initialize(&self) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute_batch(schema::CREATE_TABLE)?;
        tracing::debug!("Table '{}' ready", schema::TABLE_NAME);
        Ok(())
    }

    /// Insert a new record
    ///
    /// Fails with [`RollbookError::DuplicateKey`] if the roll number is taken;
    /// the table is left unchanged in that case.
    pub fn add(&self, student: &NewStudent) -> Result<StudentRecord> {
        let conn = self.conn.lock();

        let inserted = conn.execute(
            schema::INSERT,
            params![student.name, student.roll_no, student.course, student.marks],
        );

        match inserted {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                tracing::warn!("Rejected duplicate roll number {}", student.roll_no);
                return Err(RollbookError::DuplicateKey {
                    roll_no: student.roll_no,
                });
            }
            Err(e) => return Err(e.into()),
        }

        let id = conn.last_insert_rowid();
        tracing::debug!("Inserted roll {} as id {}", student.roll_no, id);

        Ok(StudentRecord {
            id,
            name: student.name.clone(),
            roll_no: student.roll_no,
            course: student.course.clone(),
            marks: student.marks,
        })
    }

    /// All records, ascending by roll number
    pub fn list_all(&self) -> Result<Vec<StudentRecord>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(schema::SELECT_ALL)?;
        let rows = stmt
            .query_map([], record_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Point lookup by roll number
    pub fn find_by_roll(&self, roll_no: i64) -> Result<Option<StudentRecord>> {
        let conn = self.conn.lock();
        let record = conn
            .query_row(schema::SELECT_BY_ROLL, params![roll_no], record_from_row)
            .optional()?;
        Ok(record)
    }

    /// Records whose name contains `part`, ascending by roll number
    ///
    /// Matching is case-sensitive. An empty `part` matches every record.
    pub fn search_by_name(&self, part: &str) -> Result<Vec<StudentRecord>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(schema::SELECT_BY_NAME)?;
        let rows = stmt
            .query_map(params![part], record_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        tracing::debug!("Name search {:?} matched {} rows", part, rows.len());
        Ok(rows)
    }

    /// Overwrite the supplied fields of the record with `roll_no`
    ///
    /// Name and roll number are never touched. An update with no fields
    /// does not reach the database.
    pub fn update(&self, roll_no: i64, update: &StudentUpdate) -> Result<UpdateOutcome> {
        if update.is_empty() {
            return Ok(UpdateOutcome::NothingToUpdate);
        }

        let conn = self.conn.lock();
        let changed = conn.execute(
            schema::UPDATE_PARTIAL,
            params![update.course, update.marks, roll_no],
        )?;
        tracing::debug!("Update roll {} changed {} rows", roll_no, changed);

        Ok(if changed > 0 {
            UpdateOutcome::Updated
        } else {
            UpdateOutcome::NotFound
        })
    }

    /// Remove the record with `roll_no`
    ///
    /// Returns whether a record existed and was removed.
    pub fn delete(&self, roll_no: i64) -> Result<bool> {
        let conn = self.conn.lock();
        let removed = conn.execute(schema::DELETE_BY_ROLL, params![roll_no])?;
        tracing::debug!("Delete roll {} removed {} rows", roll_no, removed);
        Ok(removed > 0)
    }

    /// Number of stored records
    pub fn count(&self) -> Result<usize> {
        let conn = self.conn.lock();
        let count: i64 = conn.query_row(schema::COUNT, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<StudentRecord> {
    Ok(StudentRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        roll_no: row.get(2)?,
        course: row.get(3)?,
        marks: row.get(4)?,
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => {
            e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        }
        _ => false,
    }
}
