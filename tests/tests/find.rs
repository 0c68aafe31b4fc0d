#![cfg(feature = "sqlite")]

use dbo::stmt::{Condition, Filter, Returning, Select};
use pretty_assertions::assert_eq;
use tests::prelude::*;

const SEED: &str = "
    INSERT INTO items (id, name, score, status) VALUES
        (1, 'apple', 1.5, 'active'),
        (2, 'banana', 3.0, 'active'),
        (3, 'cherry', 4.5, 'archived'),
        (4, 'damson', 6.0, 'active');
";

async fn seeded() -> Fixture {
    let mut fixture = setup(ITEMS_DDL).await;
    fixture.db.execute_raw(SEED).await.unwrap();
    fixture.log.clear();
    fixture
}

#[tokio::test]
async fn records_matching_equality() {
    let Fixture { db, mut log } = seeded().await;

    let records = Find::model::<Item>()
        .filter("status", "active")
        .records(&db)
        .await
        .unwrap();

    let names: Vec<_> = records.iter().map(|r| r.get("name").clone()).collect();
    assert_eq!(names, ["apple", "banana", "damson"]);

    for record in &records {
        assert!(record.exists());
        assert!(record.dirty().is_empty());
    }

    let (stmt, _) = log.pop_stmt();
    assert_eq!(
        stmt,
        Statement::Select(
            Select::new("items", Returning::All).filter(Filter::by("status", "active"))
        )
    );
}

#[tokio::test]
async fn conditions_are_joined_with_and() {
    let Fixture { db, mut log } = seeded().await;

    let items: Vec<Item> = Find::model::<Item>()
        .filter("status", "active")
        .where_clause("score", ">=", 3)
        .unwrap()
        .all(&db)
        .await
        .unwrap();

    let names: Vec<_> = items.iter().map(Item::name).collect();
    assert_eq!(names, ["banana", "damson"]);

    let (stmt, _) = log.pop_stmt();
    let Statement::Select(select) = stmt else {
        panic!("expected select; actual={stmt:#?}");
    };
    assert_eq!(
        select.filter,
        Filter::by("status", "active").and(Condition::new("score", BinaryOp::Ge, 3))
    );
}

#[tokio::test]
async fn like_and_inequality() {
    let Fixture { db, .. } = seeded().await;

    let rows = Find::model::<Item>()
        .where_clause("name", "LIKE", "%an%")
        .unwrap()
        .filter_op("id", BinaryOp::Ne, 2)
        .rows(&db)
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "damson");
}

#[tokio::test]
async fn limit_caps_records() {
    let Fixture { db, .. } = seeded().await;

    let records = Find::model::<Item>().limit(2).records(&db).await.unwrap();
    assert_eq!(records.len(), 2);

    // Zero means no limit
    let records = Find::model::<Item>().limit(0).records(&db).await.unwrap();
    assert_eq!(records.len(), 4);
}

#[tokio::test]
async fn count_with_filter_and_limit() {
    let Fixture { db, mut log } = seeded().await;

    let count = Find::model::<Item>()
        .where_clause("status", "=", "active")
        .unwrap()
        .limit(10)
        .count(&db)
        .await
        .unwrap();
    assert_eq!(count, 3);

    let (stmt, _) = log.pop_stmt();
    assert_eq!(
        stmt,
        Statement::Select(
            Select::new("items", Returning::Count)
                .filter(Filter::by("status", "active"))
                .limit(10)
        )
    );

    assert_eq!(Find::model::<Item>().count(&db).await.unwrap(), 4);
}

#[tokio::test]
async fn exec_dispatches_on_mode() {
    let Fixture { db, .. } = seeded().await;
    let find = Find::model::<Item>().filter("id", 3);

    let Found::Records(records) = find.exec(&db, FindMode::Records).await.unwrap() else {
        panic!("expected records");
    };
    assert_eq!(*records[0].get("score"), Value::F64(4.5));

    let Found::Count(count) = find.exec(&db, FindMode::Count).await.unwrap() else {
        panic!("expected count");
    };
    assert_eq!(count, 1);

    let found = find.exec(&db, FindMode::Rows).await.unwrap();
    assert!(found.is_rows());
}

#[tokio::test]
async fn found_records_can_be_updated() {
    let Fixture { db, mut log } = seeded().await;

    let mut records = Find::model::<Item>()
        .filter("name", "cherry")
        .records(&db)
        .await
        .unwrap();
    let record = &mut records[0];

    record.set("status", "active").unwrap();
    assert!(record.store().await.unwrap());

    let (stmt, _) = log.pop_stmt();
    assert!(matches!(stmt, Statement::Update(_)));

    let count = Find::model::<Item>()
        .filter("status", "active")
        .count(&db)
        .await
        .unwrap();
    assert_eq!(count, 4);
}

#[tokio::test]
async fn storage_names_are_used_in_filters() {
    let Fixture { db, mut log } = setup(
        "CREATE TABLE people (person_id INTEGER PRIMARY KEY, full_name TEXT NOT NULL);
         INSERT INTO people VALUES (1, 'Ann'), (2, 'Bob');",
    )
    .await;

    let mut schema = Schema::with_table("people");
    schema
        .set_id_column(Column::builder("id", Type::Int).storage_name("person_id"))
        .add_column(Column::builder("name", Type::String).storage_name("full_name"));
    let schema = Arc::new(schema);

    let records = Find::new(schema.clone())
        .filter("name", "Bob")
        .records(&db)
        .await
        .unwrap();
    let bob = assert_some!(records.first());
    assert_eq!(records.len(), 1);
    assert_eq!(*bob.get("id"), Value::I64(2));
    assert_eq!(*bob.get("name"), "Bob");

    let (stmt, _) = log.pop_stmt();
    let Statement::Select(select) = stmt else {
        panic!("expected select; actual={stmt:#?}");
    };
    assert_eq!(select.filter, Filter::by("full_name", "Bob"));

    let record = Record::open(schema, db.clone(), 1, None).await.unwrap();
    assert_eq!(*record.get("name"), "Ann");
}

#[tokio::test]
async fn unknown_operator_is_rejected() {
    let Fixture { mut log, .. } = seeded().await;

    let err = assert_err!(Find::model::<Item>().where_clause("name", "=~", "a"));
    assert!(err.is_unsupported_operator());
    assert_none!(log.pop());
}

#[tokio::test]
async fn backend_errors_propagate() {
    let Fixture { db, .. } = seeded().await;

    let err = assert_err!(
        Find::model::<Item>()
            .filter("no_such_column", 1)
            .records(&db)
            .await
    );
    assert!(err.is_driver_operation_failed());
    assert!(!db.is_connected().await);
}

#[tokio::test]
async fn backend_errors_name_the_table() {
    let Fixture { db, .. } = setup("").await;

    let err = assert_err!(Find::model::<Item>().count(&db).await);
    assert!(err.to_string().starts_with("find on `items`: "));
}

#[tokio::test]
async fn null_fields_keep_defaults_in_found_records() {
    let Fixture { db, .. } = setup(
        "CREATE TABLE notes (id INTEGER PRIMARY KEY, status TEXT);
         INSERT INTO notes VALUES (1, NULL);",
    )
    .await;

    let mut schema = Schema::with_table("notes");
    schema
        .set_id_column(Column::new("id", Type::Int))
        .add_column(Column::builder("status", Type::String).default_value("active"));
    let schema = Arc::new(schema);

    let found = Find::new(schema.clone()).records(&db).await.unwrap();
    assert_eq!(*found[0].get("status"), "active");

    // Loading by id casts every field
    let loaded = Record::open(schema, db, 1, None).await.unwrap();
    assert!(loaded.exists());
    assert_eq!(*loaded.get("status"), "");
}
