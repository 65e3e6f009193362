//! Tests for the per-task metadata files.

use super::*;
use crate::record::{ContactFields, NOT_PROVIDED};
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use tempfile::TempDir;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_fields() -> ContactFields {
    ContactFields {
        first_name: "Jan".to_string(),
        last_name: "Kowalski".to_string(),
        address: "ul. Długa 5, Kraków".to_string(),
        phone_number: "+48 600 100 200".to_string(),
        end_date: date(2024, 6, 30),
    }
}

// ============================================================================
// Contact fields
// ============================================================================

#[test]
fn contact_fields_round_trip() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::default();
    let fields = sample_fields();

    store.save_contact_fields(temp.path(), &fields).unwrap();
    let loaded = store.load_contact_fields(temp.path(), now());

    assert_eq!(loaded, fields);
}

#[test]
fn contact_fields_round_trip_in_place_mode() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::new(WriteMode::InPlace);
    let mut fields = sample_fields();
    fields.address = String::new();

    store.save_contact_fields(temp.path(), &fields).unwrap();

    assert_eq!(store.load_contact_fields(temp.path(), now()), fields);
}

#[test]
fn contact_file_has_exactly_five_lines() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::default();
    fs::write(temp.path().join(CONTACT_FILE), "a\nb\nc\nd\n2020-01-01\nextra\nmore\n").unwrap();

    store.save_contact_fields(temp.path(), &sample_fields()).unwrap();

    let content = fs::read_to_string(temp.path().join(CONTACT_FILE)).unwrap();
    assert_eq!(
        content,
        "Jan\nKowalski\nul. Długa 5, Kraków\n+48 600 100 200\n2024-06-30\n"
    );
}

#[test]
fn missing_contact_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::default();

    let loaded = store.load_contact_fields(temp.path(), now());

    assert_eq!(loaded.first_name, NOT_PROVIDED);
    assert_eq!(loaded.last_name, NOT_PROVIDED);
    assert_eq!(loaded.address, NOT_PROVIDED);
    assert_eq!(loaded.phone_number, NOT_PROVIDED);
    assert_eq!(loaded.end_date, date(2024, 5, 8));
}

#[test]
fn three_line_contact_file_fills_rest_with_defaults() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::default();
    fs::write(temp.path().join(CONTACT_FILE), "Anna\nNowak\nRynek 1\n").unwrap();

    let loaded = store.load_contact_fields(temp.path(), now());

    assert_eq!(loaded.first_name, "Anna");
    assert_eq!(loaded.last_name, "Nowak");
    assert_eq!(loaded.address, "Rynek 1");
    assert_eq!(loaded.phone_number, NOT_PROVIDED);
    assert_eq!(loaded.end_date, date(2024, 5, 8));
}

#[test]
fn unparsable_date_falls_back_to_default() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::default();
    fs::write(temp.path().join(CONTACT_FILE), "a\nb\nc\nd\nnext tuesday\n").unwrap();

    let loaded = store.load_contact_fields(temp.path(), now());

    assert_eq!(loaded.phone_number, "d");
    assert_eq!(loaded.end_date, date(2024, 5, 8));
}

#[test]
fn crlf_contact_file_is_accepted() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::default();
    fs::write(
        temp.path().join(CONTACT_FILE),
        "Jan\r\nKowalski\r\nx\r\ny\r\n2024-06-30\r\n",
    )
    .unwrap();

    let loaded = store.load_contact_fields(temp.path(), now());

    assert_eq!(loaded.first_name, "Jan");
    assert_eq!(loaded.end_date, date(2024, 6, 30));
}

#[test]
fn save_contact_fields_rejects_line_breaks() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::default();
    let mut fields = sample_fields();
    fields.address = "line one\nline two".to_string();

    let err = store.save_contact_fields(temp.path(), &fields).unwrap_err();

    assert!(matches!(err, DocketError::UserError(_)));
    assert!(!temp.path().join(CONTACT_FILE).exists());
}

#[test]
fn save_contact_fields_into_missing_dir_is_io_error() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::default();

    let err = store
        .save_contact_fields(&temp.path().join("gone"), &sample_fields())
        .unwrap_err();

    assert!(matches!(err, DocketError::IoError { .. }));
}

#[test]
fn parse_date_accepts_legacy_shapes() {
    assert_eq!(parse_date("2024-06-30"), Some(date(2024, 6, 30)));
    assert_eq!(parse_date(" 2024-06-30 "), Some(date(2024, 6, 30)));
    assert_eq!(parse_date("30.06.2024"), Some(date(2024, 6, 30)));
    assert_eq!(parse_date("06/30/2024"), Some(date(2024, 6, 30)));
    assert_eq!(parse_date("2024-06-30 00:00:00"), Some(date(2024, 6, 30)));
    assert_eq!(parse_date("30.06.2024 14:05:00"), Some(date(2024, 6, 30)));
    assert_eq!(parse_date("2024-02-30"), None);
    assert_eq!(parse_date(""), None);
}

#[test]
fn legacy_end_date_file_uses_midnight_stamp() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::default();

    store.save_legacy_end_date(temp.path(), date(2024, 6, 30)).unwrap();

    let content = fs::read_to_string(temp.path().join(LEGACY_END_DATE_FILE)).unwrap();
    assert_eq!(content, "2024-06-30 00:00:00");
    assert_eq!(parse_date(&content), Some(date(2024, 6, 30)));
}

// ============================================================================
// Priority
// ============================================================================

#[test]
fn priority_round_trip() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::default();

    store.save_priority(temp.path(), true).unwrap();
    assert_eq!(fs::read_to_string(temp.path().join(PRIORITY_FILE)).unwrap(), "True");
    assert!(store.load_priority(temp.path()));

    store.save_priority(temp.path(), false).unwrap();
    assert_eq!(fs::read_to_string(temp.path().join(PRIORITY_FILE)).unwrap(), "False");
    assert!(!store.load_priority(temp.path()));
}

#[test]
fn priority_missing_or_garbage_is_false() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::default();
    assert!(!store.load_priority(temp.path()));

    fs::write(temp.path().join(PRIORITY_FILE), "yes please").unwrap();
    assert!(!store.load_priority(temp.path()));

    fs::write(temp.path().join(PRIORITY_FILE), "").unwrap();
    assert!(!store.load_priority(temp.path()));
}

#[test]
fn priority_parse_is_lenient_about_case_and_whitespace() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::default();

    for token in ["true", "TRUE", " True\r\n"] {
        fs::write(temp.path().join(PRIORITY_FILE), token).unwrap();
        assert!(store.load_priority(temp.path()), "token {:?}", token);
    }
}

#[test]
fn priority_write_leaves_contact_file_alone() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::default();
    store.save_contact_fields(temp.path(), &sample_fields()).unwrap();
    let before = fs::read(temp.path().join(CONTACT_FILE)).unwrap();

    store.save_priority(temp.path(), true).unwrap();

    assert_eq!(fs::read(temp.path().join(CONTACT_FILE)).unwrap(), before);
}

// ============================================================================
// Sub-tasks
// ============================================================================

#[test]
fn subtasks_missing_file_is_empty() {
    let temp = TempDir::new().unwrap();
    assert!(RecordStore::default().load_subtasks(temp.path()).unwrap().is_empty());
}

#[test]
fn subtasks_load_trims_and_drops_blanks() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(SUBTASKS_FILE),
        "  - measure  \n\n   \n- order tiles\r\n- measure\n",
    )
    .unwrap();

    let items = RecordStore::default().load_subtasks(temp.path()).unwrap();

    assert_eq!(items, vec!["- measure", "- order tiles", "- measure"]);
}

#[test]
fn subtasks_save_is_full_replace() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::default();
    store
        .save_subtasks(temp.path(), &["- a".to_string(), "- b".to_string()])
        .unwrap();

    store.save_subtasks(temp.path(), &["- c".to_string()]).unwrap();

    assert_eq!(
        fs::read_to_string(temp.path().join(SUBTASKS_FILE)).unwrap(),
        "- c\n"
    );
    assert_eq!(store.load_subtasks(temp.path()).unwrap(), vec!["- c"]);
}

#[test]
fn subtasks_save_empty_list_truncates() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::default();
    store.save_subtasks(temp.path(), &["- a".to_string()]).unwrap();

    store.save_subtasks(temp.path(), &[]).unwrap();

    assert!(store.load_subtasks(temp.path()).unwrap().is_empty());
}

#[test]
fn parse_subtask_input_splits_on_commas() {
    let items = parse_subtask_input(" measure , order tiles,,  ,grout").unwrap();
    assert_eq!(items, vec!["- measure", "- order tiles", "- grout"]);
}

#[test]
fn parse_subtask_input_rejects_empty() {
    assert!(matches!(
        parse_subtask_input("  , ,"),
        Err(DocketError::UserError(_))
    ));
    assert!(parse_subtask_input("").is_err());
}

#[test]
fn subtasks_save_rejects_line_breaks() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::default();

    let err = store
        .save_subtasks(temp.path(), &["- one\n- two".to_string()])
        .unwrap_err();

    assert!(matches!(err, DocketError::UserError(_)));
    assert!(!temp.path().join(SUBTASKS_FILE).exists());
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn invalid_utf8_contact_line_keeps_other_fields() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(CONTACT_FILE),
        b"\xa3ukasz\nNowak\nRynek 1\n600\n2024-06-30\n",
    )
    .unwrap();

    let loaded = RecordStore::default().load_contact_fields(temp.path(), now());

    assert_eq!(loaded.first_name, "\u{fffd}ukasz");
    assert_eq!(loaded.last_name, "Nowak");
    assert_eq!(loaded.address, "Rynek 1");
    assert_eq!(loaded.phone_number, "600");
    assert_eq!(loaded.end_date, date(2024, 6, 30));
}

#[test]
fn invalid_utf8_subtask_file_still_loads() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(SUBTASKS_FILE), b"- zam\xf3wi\xe6\n- measure\n").unwrap();

    let items = RecordStore::default().load_subtasks(temp.path()).unwrap();

    assert_eq!(items.len(), 2);
    assert!(items[0].starts_with("- zam"));
    assert_eq!(items[1], "- measure");
}

#[test]
fn byte_order_mark_is_ignored() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::default();
    fs::write(temp.path().join(PRIORITY_FILE), "\u{feff}True").unwrap();
    fs::write(
        temp.path().join(CONTACT_FILE),
        "\u{feff}Jan\nKowalski\nx\ny\n2024-06-30\n",
    )
    .unwrap();
    fs::write(temp.path().join(SUBTASKS_FILE), "\u{feff}- first\n").unwrap();

    assert!(store.load_priority(temp.path()));
    assert_eq!(store.load_contact_fields(temp.path(), now()).first_name, "Jan");
    assert_eq!(store.load_subtasks(temp.path()).unwrap(), vec!["- first"]);
}
