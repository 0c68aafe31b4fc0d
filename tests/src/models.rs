use dbo::{Column, Model, Record, Schema, Type};

pub const ITEMS_DDL: &str = "
    CREATE TABLE items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL DEFAULT '',
        score REAL NOT NULL DEFAULT 0.0,
        status TEXT NOT NULL DEFAULT 'active'
    );
";

/// `items(id, name, score, status)` with typed accessors.
#[derive(Debug)]
pub struct Item(Record);

impl Model for Item {
    fn schema() -> Schema {
        let mut schema = Schema::with_table("items");
        schema
            .set_id_column(Column::new("id", Type::Int))
            .add_column(Column::builder("name", Type::String).default_value(""))
            .add_column(Column::builder("score", Type::Float).default_value(0.0))
            .add_column(Column::builder("status", Type::String).default_value("active"));
        schema
    }

    fn from_record(record: Record) -> Self {
        Item(record)
    }

    fn record(&self) -> &Record {
        &self.0
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.0
    }
}

impl Item {
    pub fn id(&self) -> i64 {
        self.get("id").as_i64().unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.get("name").as_str().unwrap_or_default()
    }

    pub fn set_name(&mut self, name: &str) {
        self.set("name", name).expect("`name` is a column");
    }

    pub fn score(&self) -> f64 {
        self.get("score").as_f64().unwrap_or_default()
    }

    pub fn set_score(&mut self, score: f64) {
        self.set("score", score).expect("`score` is a column");
    }

    pub fn status(&self) -> &str {
        self.get("status").as_str().unwrap_or_default()
    }
}
