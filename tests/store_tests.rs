//! Tests for StudentStore
//!
//! These tests verify:
//! - Table creation and idempotent initialization
//! - Roll-number uniqueness
//! - Ordering of listings and name searches
//! - Partial updates and deletes
//! - Persistence across reopen

use rollbook::config::Config;
use rollbook::store::StudentStore;
use rollbook::{NewStudent, RollbookError, StudentRecord, StudentUpdate, UpdateOutcome};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_memory_store() -> StudentStore {
    StudentStore::open_in_memory().unwrap()
}

fn setup_temp_store() -> (TempDir, StudentStore) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .db_path(temp_dir.path().join("student.db"))
        .build();
    let store = StudentStore::open(config).unwrap();
    (temp_dir, store)
}

fn ann() -> NewStudent {
    NewStudent::new("Ann", 101).course("CS").marks(88)
}

fn bo() -> NewStudent {
    NewStudent::new("Bo", 50).course("EE").marks(70)
}

// =============================================================================
// Open / Initialize Tests
// =============================================================================

#[test]
fn test_open_creates_database_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("student.db");

    let config = Config::builder().db_path(&path).build();
    let store = StudentStore::open(config).unwrap();

    assert!(path.exists());
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_open_rejects_empty_path() {
    let config = Config::builder().db_path("").build();

    let result = StudentStore::open(config);

    assert!(matches!(result, Err(RollbookError::Config(_))));
}

#[test]
fn test_initialize_is_idempotent() {
    let store = setup_memory_store();
    store.add(&ann()).unwrap();

    store.initialize().unwrap();
    store.initialize().unwrap();

    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_list_all_empty() {
    let store = setup_memory_store();

    assert!(store.list_all().unwrap().is_empty());
}

// =============================================================================
// Add Tests
// =============================================================================

#[test]
fn test_add_then_find_round_trip() {
    let store = setup_memory_store();

    let added = store.add(&ann()).unwrap();
    let found = store.find_by_roll(101).unwrap().expect("record not found");

    assert_eq!(added, found);
    assert_eq!(found.name, "Ann");
    assert_eq!(found.roll_no, 101);
    assert_eq!(found.course.as_deref(), Some("CS"));
    assert_eq!(found.marks, Some(88));
}

#[test]
fn test_add_without_optional_fields() {
    let store = setup_memory_store();

    store.add(&NewStudent::new("Cy", 7)).unwrap();
    let found = store.find_by_roll(7).unwrap().unwrap();

    assert_eq!(found.course, None);
    assert_eq!(found.marks, None);
}

#[test]
fn test_add_duplicate_roll_fails_and_leaves_store_unchanged() {
    let store = setup_memory_store();
    store.add(&ann()).unwrap();

    let result = store.add(&NewStudent::new("Other", 101).course("ME").marks(10));

    assert!(matches!(
        result,
        Err(RollbookError::DuplicateKey { roll_no: 101 })
    ));
    assert_eq!(store.count().unwrap(), 1);
    assert_eq!(store.find_by_roll(101).unwrap().unwrap().name, "Ann");
}

#[test]
fn test_ids_increase_and_are_not_reused() {
    let store = setup_memory_store();

    let first = store.add(&ann()).unwrap();
    let second = store.add(&bo()).unwrap();
    assert!(second.id > first.id);

    assert!(store.delete(50).unwrap());
    let third = store.add(&NewStudent::new("Cy", 7)).unwrap();

    assert!(third.id > second.id);
}

// =============================================================================
// Listing / Search Tests
// =============================================================================

#[test]
fn test_list_all_ordered_by_roll() {
    let store = setup_memory_store();

    for roll in [30, 5, 999, 1, 42] {
        store
            .add(&NewStudent::new(format!("S{}", roll), roll))
            .unwrap();
    }

    let rolls: Vec<i64> = store
        .list_all()
        .unwrap()
        .iter()
        .map(|r| r.roll_no)
        .collect();
    assert_eq!(rolls, vec![1, 5, 30, 42, 999]);
}

#[test]
fn test_search_by_name_is_case_sensitive_substring() {
    let store = setup_memory_store();
    store.add(&ann()).unwrap();
    store.add(&bo()).unwrap();
    store.add(&NewStudent::new("Joanna", 3)).unwrap();

    let names: Vec<String> = store
        .search_by_name("nn")
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["Joanna", "Ann"]);

    let lower = store.search_by_name("ann").unwrap();
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].name, "Joanna");
    assert!(store.search_by_name("ANN").unwrap().is_empty());
}

#[test]
fn test_search_by_name_empty_matches_all() {
    let store = setup_memory_store();
    store.add(&ann()).unwrap();
    store.add(&bo()).unwrap();

    let rows = store.search_by_name("").unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].roll_no, 50);
}

#[test]
fn test_search_by_name_treats_like_wildcards_literally() {
    let store = setup_memory_store();
    store.add(&ann()).unwrap();
    store.add(&NewStudent::new("100%_done", 2)).unwrap();

    let rows = store.search_by_name("%").unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].roll_no, 2);
}

#[test]
fn test_find_by_roll_missing() {
    let store = setup_memory_store();
    store.add(&ann()).unwrap();

    assert!(store.find_by_roll(404).unwrap().is_none());
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_update_marks_only_preserves_other_fields() {
    let store = setup_memory_store();
    store.add(&ann()).unwrap();

    let outcome = store
        .update(101, &StudentUpdate::new(None, Some(95)))
        .unwrap();

    assert_eq!(outcome, UpdateOutcome::Updated);
    let found = store.find_by_roll(101).unwrap().unwrap();
    assert_eq!(found.marks, Some(95));
    assert_eq!(found.course.as_deref(), Some("CS"));
    assert_eq!(found.name, "Ann");
    assert_eq!(found.roll_no, 101);
}

#[test]
fn test_update_course_only() {
    let store = setup_memory_store();
    store.add(&ann()).unwrap();

    store
        .update(101, &StudentUpdate::new(Some("Math".into()), None))
        .unwrap();

    let found = store.find_by_roll(101).unwrap().unwrap();
    assert_eq!(found.course.as_deref(), Some("Math"));
    assert_eq!(found.marks, Some(88));
}

#[test]
fn test_update_both_fields() {
    let store = setup_memory_store();
    store.add(&ann()).unwrap();

    store
        .update(101, &StudentUpdate::new(Some("Bio".into()), Some(0)))
        .unwrap();

    let found = store.find_by_roll(101).unwrap().unwrap();
    assert_eq!(found.course.as_deref(), Some("Bio"));
    assert_eq!(found.marks, Some(0));
}

#[test]
fn test_update_with_no_fields_is_nothing_to_update() {
    let store = setup_memory_store();
    store.add(&ann()).unwrap();

    let outcome = store.update(101, &StudentUpdate::default()).unwrap();

    assert_eq!(outcome, UpdateOutcome::NothingToUpdate);
    assert!(!outcome.is_updated());
    assert_eq!(store.find_by_roll(101).unwrap().unwrap().marks, Some(88));
}

#[test]
fn test_update_missing_roll_is_not_found() {
    let store = setup_memory_store();

    let outcome = store
        .update(404, &StudentUpdate::new(None, Some(50)))
        .unwrap();

    assert_eq!(outcome, UpdateOutcome::NotFound);
    assert_eq!(store.count().unwrap(), 0);
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_twice_true_then_false() {
    let store = setup_memory_store();
    store.add(&ann()).unwrap();

    assert!(store.delete(101).unwrap());
    assert!(!store.delete(101).unwrap());
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_delete_missing_leaves_store_unchanged() {
    let store = setup_memory_store();
    store.add(&ann()).unwrap();

    assert!(!store.delete(7).unwrap());
    assert_eq!(store.count().unwrap(), 1);
}

// =============================================================================
// Scenario / Persistence Tests
// =============================================================================

#[test]
fn test_full_scenario() {
    let store = setup_memory_store();

    store.add(&ann()).unwrap();
    assert_eq!(
        store.list_all().unwrap(),
        vec![StudentRecord {
            id: 1,
            name: "Ann".into(),
            roll_no: 101,
            course: Some("CS".into()),
            marks: Some(88),
        }]
    );

    store.add(&bo()).unwrap();
    let rows = store.list_all().unwrap();
    assert_eq!(rows[0].name, "Bo");
    assert_eq!(rows[1].name, "Ann");

    let found = store.search_by_name("An").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].roll_no, 101);

    store
        .update(101, &StudentUpdate::new(None, Some(95)))
        .unwrap();
    let ann = store.find_by_roll(101).unwrap().unwrap();
    assert_eq!(ann.marks, Some(95));
    assert_eq!(ann.course.as_deref(), Some("CS"));

    store.delete(50).unwrap();
    let rows = store.list_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Ann");
}

#[test]
fn test_records_survive_reopen() {
    let (temp, store) = setup_temp_store();
    store.add(&ann()).unwrap();
    store.add(&bo()).unwrap();
    drop(store);

    let config = Config::builder()
        .db_path(temp.path().join("student.db"))
        .build();
    let reopened = StudentStore::open(config).unwrap();

    assert_eq!(reopened.count().unwrap(), 2);
    assert_eq!(reopened.find_by_roll(50).unwrap().unwrap().name, "Bo");
}

#[test]
fn test_two_handles_share_one_file() {
    let (temp, first) = setup_temp_store();
    let config = Config::builder()
        .db_path(temp.path().join("student.db"))
        .build();
    let second = StudentStore::open(config).unwrap();

    first.add(&ann()).unwrap();

    assert_eq!(second.find_by_roll(101).unwrap().unwrap().name, "Ann");
    assert!(matches!(
        second.add(&ann()),
        Err(RollbookError::DuplicateKey { .. })
    ));
}
