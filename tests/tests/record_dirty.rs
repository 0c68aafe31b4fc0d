use pretty_assertions::assert_eq;
use tests::prelude::*;

fn record() -> Record {
    Record::new(Item::schema())
}

#[test]
fn set_casts_to_column_type() {
    let mut record = record();

    record.set("id", "12abc").unwrap();
    record.set("score", "2.5").unwrap();
    record.set("name", 7).unwrap();

    assert_eq!(*record.get("id"), 12_i64);
    assert_eq!(*record.get("score"), 2.5);
    assert_eq!(*record.get("name"), "7");
}

#[test]
fn equal_write_is_not_dirty() {
    let mut record = record();

    // Casts to the current default
    record.set("score", "0").unwrap();
    record.set("name", "").unwrap();

    assert!(record.dirty().is_empty());
}

#[test]
fn repeated_write_marks_dirty_once() {
    let mut record = record();

    record.set("name", "a").unwrap();
    record.set("name", "a").unwrap();

    assert_eq!(record.dirty().len(), 1);
    assert_eq!(record.dirty()["name"], "a");
}

#[test]
fn dirty_is_monotonic() {
    let mut record = record();

    record.set("name", "a").unwrap();
    record.set("name", "b").unwrap();
    assert_eq!(record.dirty()["name"], "b");

    // Back to the original value: still pending
    record.set("name", "").unwrap();
    assert!(record.is_dirty("name"));
    assert_eq!(record.dirty()["name"], "");
    assert_eq!(*record.get("name"), "");
}

#[test]
fn dirty_keeps_first_change_order() {
    let mut record = record();

    record.set("score", 1.0).unwrap();
    record.set("name", "a").unwrap();
    record.set("score", 2.0).unwrap();

    let names: Vec<_> = record.dirty().keys().map(String::as_str).collect();
    assert_eq!(names, ["score", "name"]);
}

#[test]
fn write_to_unknown_column_fails() {
    let mut record = record();

    let err = assert_err!(record.set("colour", "red"));
    assert!(err.is_unknown_column());
    assert_eq!(err.to_string(), "unknown column `colour`");
    assert!(record.dirty().is_empty());
}

#[test]
fn read_of_unknown_column_is_null() {
    let record = record();
    assert_eq!(*record.get("colour"), Value::Null);
}

#[test]
fn values_cover_every_column() {
    let record = record();

    let names: Vec<_> = record.values().keys().map(String::as_str).collect();
    assert_eq!(names, ["id", "name", "score", "status"]);
}

#[test]
fn nullable_column_accepts_null() {
    let mut schema = Schema::with_table("notes");
    schema
        .set_id_column(Column::new("id", Type::Int))
        .add_column(Column::builder("body", Type::String).nullable(true));

    let mut record = Record::new(schema);
    assert_eq!(*record.get("body"), Value::Null);

    record.set("body", "text").unwrap();
    record.set("body", Value::Null).unwrap();

    assert_eq!(*record.get("body"), Value::Null);
    assert_eq!(record.dirty()["body"], Value::Null);
}

#[test]
fn reset_restores_defaults() {
    let mut record = record();
    record.set("name", "a").unwrap();

    record.reset();

    assert_eq!(*record.get("name"), "");
    assert!(record.dirty().is_empty());
}
