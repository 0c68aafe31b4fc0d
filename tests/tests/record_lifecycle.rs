#![cfg(feature = "sqlite")]

use dbo::{
    driver::Operation,
    stmt::{Delete, Filter, Insert, Returning, Select, Update},
};
use pretty_assertions::assert_eq;
use tests::prelude::*;

fn items() -> Arc<Schema> {
    Arc::new(Item::schema())
}

fn item_columns() -> Returning {
    Returning::Columns(
        ["id", "name", "score", "status"]
            .into_iter()
            .map(String::from)
            .collect(),
    )
}

#[tokio::test]
async fn new_record_is_transient_with_defaults() {
    let record = Record::new(items());

    assert!(!record.exists());
    assert!(record.dirty().is_empty());
    assert_eq!(*record.get("id"), 0_i64);
    assert_eq!(*record.get("name"), "");
    assert_eq!(*record.get("score"), 0.0);
    assert_eq!(*record.get("status"), "active");
}

#[tokio::test]
async fn store_inserts_all_columns_and_reads_back_generated_id() {
    let Fixture { db, mut log } = setup(ITEMS_DDL).await;

    let mut record = Record::new(items());
    record.bind_connection(db.clone());
    record.set("name", "a").unwrap();

    assert!(assert_ok!(record.store().await));
    assert!(record.exists());
    assert!(record.dirty().is_empty());
    assert_eq!(*record.get("id"), 1_i64);

    let mut expected = Insert::new("items").replace();
    expected.push("name", "a");
    expected.push("score", 0.0);
    expected.push("status", "active");

    let (stmt, res) = log.pop_stmt();
    assert_eq!(stmt, Statement::Insert(expected));
    assert_eq!(res.unwrap().rows, Rows::Count(1));

    let (op, res) = log.pop().unwrap();
    assert_eq!(op, Operation::LastInsertId);
    assert_eq!(res.unwrap().rows, Rows::Value(Value::I64(1)));

    assert!(log.is_empty());
    assert_eq!(log.connects(), 1);
    assert!(!db.is_connected().await);
}

#[tokio::test]
async fn store_keeps_explicit_id() {
    let Fixture { db, mut log } = setup(ITEMS_DDL).await;

    let mut record = Record::new(items());
    record.bind_connection(db.clone());
    record.set("id", 42).unwrap();
    record.set("name", "answer").unwrap();

    assert!(record.store().await.unwrap());
    assert_eq!(*record.get("id"), 42_i64);

    let (stmt, _) = log.pop_stmt();
    let Statement::Insert(insert) = stmt else {
        panic!("expected insert; actual={stmt:#?}");
    };
    assert_eq!(insert.columns, ["id", "name", "score", "status"]);
    assert_eq!(insert.values[0], 42_i64);

    // No identifier to read back
    assert!(log.is_empty());

    let found = Record::open(items(), db.clone(), 42, None).await.unwrap();
    assert!(found.exists());
    assert_eq!(*found.get("name"), "answer");
}

#[tokio::test]
async fn load_existing_row() {
    let Fixture { db, mut log } = setup(ITEMS_DDL).await;
    db.execute_raw("INSERT INTO items (id, name, score) VALUES (5, 'x', 1.5);")
        .await
        .unwrap();
    log.clear();

    let mut record = Record::new(items());
    record.bind_connection(db.clone());

    assert!(record.load(5).await.unwrap());
    assert!(record.exists());
    assert!(record.dirty().is_empty());
    assert_eq!(*record.get("id"), 5_i64);
    assert_eq!(*record.get("name"), "x");
    assert_eq!(*record.get("score"), 1.5);
    assert_eq!(*record.get("status"), "active");

    let (stmt, _) = log.pop_stmt();
    assert_eq!(
        stmt,
        Statement::Select(
            Select::new("items", item_columns())
                .filter(Filter::by("id", 5))
                .limit(1)
        )
    );
    assert!(!db.is_connected().await);
}

#[tokio::test]
async fn load_missing_row_leaves_defaults() {
    let Fixture { db, .. } = setup(ITEMS_DDL).await;

    let mut record = Record::new(items());
    record.bind_connection(db.clone());
    record.set("name", "pending").unwrap();

    assert!(!record.load(99).await.unwrap());
    assert!(!record.exists());
    assert!(record.dirty().is_empty());
    assert_eq!(*record.get("id"), 0_i64);
    assert_eq!(*record.get("name"), "");
}

#[tokio::test]
async fn load_by_other_column() {
    let Fixture { db, mut log } = setup(ITEMS_DDL).await;
    db.execute_raw("INSERT INTO items (id, name) VALUES (3, 'three');")
        .await
        .unwrap();
    log.clear();

    let record = Record::open(items(), db.clone(), "three", Some("name"))
        .await
        .unwrap();

    assert!(record.exists());
    assert_eq!(*record.get("id"), 3_i64);

    let (stmt, _) = log.pop_stmt();
    let Statement::Select(select) = stmt else {
        panic!("expected select; actual={stmt:#?}");
    };
    assert_eq!(select.filter, Filter::by("name", "three"));
}

#[tokio::test]
async fn store_existing_record_updates_dirty_columns_only() {
    let Fixture { db, mut log } = setup(ITEMS_DDL).await;
    db.execute_raw("INSERT INTO items (id, name, score) VALUES (5, 'x', 1.5);")
        .await
        .unwrap();

    let mut record = Record::open(items(), db.clone(), 5, None).await.unwrap();
    record.set("name", "y").unwrap();
    log.clear();

    assert!(record.store().await.unwrap());
    assert!(record.exists());
    assert!(record.dirty().is_empty());

    let mut expected = Update::new("items", Filter::by("id", 5));
    expected.set("name", "y");

    let (stmt, res) = log.pop_stmt();
    assert_eq!(stmt, Statement::Update(expected));
    assert_eq!(res.unwrap().rows, Rows::Count(1));
    assert!(log.is_empty());

    let reloaded = Record::open(items(), db.clone(), 5, None).await.unwrap();
    assert_eq!(*reloaded.get("name"), "y");
    assert_eq!(*reloaded.get("score"), 1.5);
}

#[tokio::test]
async fn store_without_changes_does_not_connect() {
    let Fixture { db, mut log } = setup(ITEMS_DDL).await;
    db.execute_raw("INSERT INTO items (id, name) VALUES (5, 'x');")
        .await
        .unwrap();

    let mut record = Record::open(items(), db.clone(), 5, None).await.unwrap();
    log.clear();

    assert!(record.store().await.unwrap());
    assert!(record.exists());
    assert_eq!(log.connects(), 0);
    assert!(log.is_empty());
}

#[tokio::test]
async fn delete_is_repeatable() {
    let Fixture { db, mut log } = setup(ITEMS_DDL).await;

    let mut record = Record::new(items());
    record.bind_connection(db.clone());
    record.set("name", "doomed").unwrap();
    record.store().await.unwrap();
    let id = record.get("id").clone();
    log.clear();

    assert!(record.delete().await.unwrap());
    assert!(!record.exists());

    let (stmt, res) = log.pop_stmt();
    assert_eq!(stmt, Statement::Delete(Delete::new("items", Filter::by("id", id))));
    assert_eq!(res.unwrap().rows, Rows::Count(1));

    assert!(record.delete().await.unwrap());
    assert!(!record.exists());

    let (_, res) = log.pop_stmt();
    assert_eq!(res.unwrap().rows, Rows::Count(0));

    assert!(!record.load(1).await.unwrap());
}

#[tokio::test]
async fn statement_failure_is_reported_as_false() {
    let Fixture { db, .. } = setup(ITEMS_DDL).await;

    let mut schema = Item::schema();
    schema.set_table("no_such_table");
    let schema = Arc::new(schema);

    let mut record = Record::new(schema.clone());
    record.bind_connection(db.clone());
    record.set("name", "lost").unwrap();

    assert!(!record.store().await.unwrap());
    assert!(!record.exists());
    assert!(record.is_dirty("name"));

    assert!(!record.load(1).await.unwrap());
    assert!(!record.delete().await.unwrap());
    assert!(!db.is_connected().await);
}

#[tokio::test]
async fn typed_model_round_trip() {
    let Fixture { db, .. } = setup(ITEMS_DDL).await;

    let mut connections = Connections::new();
    connections.set_default::<Item>(db.clone());

    let mut item = Item::new(&connections);
    item.set_name("widget");
    item.set_score(2.25);
    assert!(item.record_mut().store().await.unwrap());
    assert!(item.exists());

    let mut loaded = Item::new(&connections);
    assert!(loaded.record_mut().load(item.id()).await.unwrap());
    assert_eq!(loaded.name(), "widget");
    assert_eq!(loaded.score(), 2.25);
    assert_eq!(loaded.status(), "active");
}
