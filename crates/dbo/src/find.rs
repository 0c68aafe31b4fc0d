use crate::{BinaryOp, Db, Model, Record, Result, Schema, Value};

use dbo_core::{
    driver::{operation::QuerySql, Row, Rows},
    err,
    stmt::{Condition, Filter, Returning, Select},
};
use std::sync::Arc;

/// Bulk lookup over a model's table.
///
/// Conditions are joined with `AND`. Rows come back in whatever order the
/// backend produces them.
#[derive(Debug, Clone)]
pub struct Find {
    schema: Arc<Schema>,
    filter: Filter,
    limit: Option<u64>,
    model: Option<&'static str>,
}

/// What a [`Find`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FindMode {
    /// Persisted records.
    #[default]
    Records,

    /// The number of matching rows.
    Count,

    /// The raw rows, without building records.
    Rows,
}

#[derive(Debug)]
pub enum Found {
    Records(Vec<Record>),
    Count(u64),
    Rows(Vec<Row>),
}

impl Find {
    pub fn new(schema: impl Into<Arc<Schema>>) -> Find {
        Find {
            schema: schema.into(),
            filter: Filter::new(),
            limit: None,
            model: None,
        }
    }

    /// A find over `M`'s table.
    pub fn model<M: Model>() -> Find {
        let mut find = Find::new(M::schema());
        find.model = Some(std::any::type_name::<M>());
        find
    }

    /// Matches rows where `column` equals `value`.
    pub fn filter(self, column: &str, value: impl Into<Value>) -> Find {
        self.filter_op(column, BinaryOp::Eq, value)
    }

    /// Matches rows where `column <op> value` holds.
    ///
    /// `column` may be a column name or a storage name. Names the schema does
    /// not know are passed through as storage names.
    pub fn filter_op(mut self, column: &str, op: BinaryOp, value: impl Into<Value>) -> Find {
        let column = match self.schema.column(column) {
            Ok(column) => column.storage_name().to_string(),
            Err(_) => column.to_string(),
        };

        self.filter.push(Condition::new(column, op, value));
        self
    }

    /// Like [`filter_op`](Find::filter_op) with the operator spelled as SQL,
    /// e.g. `">="` or `"LIKE"`.
    pub fn where_clause(self, column: &str, op: &str, value: impl Into<Value>) -> Result<Find> {
        let op = op.parse()?;
        Ok(self.filter_op(column, op, value))
    }

    /// Caps the number of rows. Zero means no limit.
    pub fn limit(mut self, limit: u64) -> Find {
        self.limit = (limit > 0).then_some(limit);
        self
    }

    pub async fn exec(&self, db: &Arc<Db>, mode: FindMode) -> Result<Found> {
        Ok(match mode {
            FindMode::Records => Found::Records(self.records(db).await?),
            FindMode::Count => Found::Count(self.count(db).await?),
            FindMode::Rows => Found::Rows(self.rows(db).await?),
        })
    }

    /// Matching rows as persisted records bound to `db`.
    pub async fn records(&self, db: &Arc<Db>) -> Result<Vec<Record>> {
        let rows = self.query(db, FindMode::Records).await?.into_values()?;

        Ok(rows
            .iter()
            .map(|row| Record::from_row(self.schema.clone(), row, db.clone(), self.model))
            .collect())
    }

    pub async fn count(&self, db: &Arc<Db>) -> Result<u64> {
        let count = self.query(db, FindMode::Count).await?.into_value()?;
        Ok(count.to_lossy_i64().max(0) as u64)
    }

    pub async fn rows(&self, db: &Arc<Db>) -> Result<Vec<Row>> {
        self.query(db, FindMode::Rows).await?.into_values()
    }

    /// Matching rows as `M` instances.
    pub async fn all<M: Model>(&self, db: &Arc<Db>) -> Result<Vec<M>> {
        Ok(self
            .records(db)
            .await?
            .into_iter()
            .map(M::from_record)
            .collect())
    }

    async fn query(&self, db: &Arc<Db>, mode: FindMode) -> Result<Rows> {
        let table = self.schema.table()?;

        let returning = match mode {
            FindMode::Count => Returning::Count,
            FindMode::Records | FindMode::Rows => Returning::All,
        };

        let mut stmt = Select::new(table, returning).filter(self.filter.clone());
        // Applied in every mode, including counts.
        if let Some(limit) = self.limit {
            stmt = stmt.limit(limit);
        }

        tracing::debug!(
            table,
            conditions = self.filter.len(),
            ?mode,
            "finding records"
        );

        let mut conn = db.connect().await?;
        let res = conn.exec(QuerySql::new(stmt).into()).await;
        conn.release();

        let res = res.map_err(|err| err.context(err!("find on `{table}`")))?;
        Ok(res.rows)
    }
}

impl Found {
    pub fn is_records(&self) -> bool {
        matches!(self, Found::Records(_))
    }

    pub fn is_count(&self) -> bool {
        matches!(self, Found::Count(_))
    }

    pub fn is_rows(&self) -> bool {
        matches!(self, Found::Rows(_))
    }
}
