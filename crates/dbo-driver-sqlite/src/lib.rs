mod value;
pub(crate) use value::Value;

use dbo_core::{
    async_trait,
    driver::{operation::QuerySql, Driver, Operation, Response, Row},
    Error, Result,
};
use dbo_sql::Serializer;
use rusqlite::{Connection as RusqliteConnection, OpenFlags};
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    sync::Mutex,
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory(InMemory),
}

/// A named, shared-cache in-memory database.
///
/// SQLite drops an in-memory database when its last connection closes. The
/// driver holds one connection for its whole lifetime so that data survives
/// the connect/disconnect cycle of individual operations.
#[derive(Debug)]
pub struct InMemory {
    uri: String,
    _keeper: Mutex<RusqliteConnection>,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Self::in_memory()
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database, private to this driver
    pub fn in_memory() -> Result<Self> {
        let uri = format!(
            "file:dbo-{}?mode=memory&cache=shared",
            uuid::Uuid::new_v4().simple()
        );
        let keeper = open(&uri).map_err(Error::connection_failed)?;

        Ok(Self::InMemory(InMemory {
            uri,
            _keeper: Mutex::new(keeper),
        }))
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

fn open(path: impl AsRef<Path>) -> rusqlite::Result<RusqliteConnection> {
    RusqliteConnection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory(_) => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    async fn connect(&self) -> Result<Box<dyn dbo_core::Connection>> {
        let path = match self {
            Sqlite::File(path) => path.as_path(),
            Sqlite::InMemory(db) => Path::new(&db.uri),
        };
        let connection = open(path).map_err(Error::connection_failed)?;
        Ok(Box::new(Connection { connection }))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    /// Open a standalone connection to the SQLite database at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = open(path).map_err(Error::connection_failed)?;
        Ok(Self { connection })
    }

    fn query_sql(&mut self, op: QuerySql) -> Result<Response> {
        let mut params: Vec<dbo_core::stmt::Value> = vec![];
        let sql_str = Serializer::sqlite().serialize(&op.stmt, &mut params);

        tracing::trace!(sql = %sql_str, params = params.len(), "executing");

        let mut stmt = self
            .connection
            .prepare_cached(&sql_str)
            .map_err(Error::driver_operation_failed)?;

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        if !op.stmt.returns_rows() {
            let count = stmt
                .execute(rusqlite::params_from_iter(params.iter()))
                .map_err(Error::driver_operation_failed)?;

            return Ok(Response::count(count as _));
        }

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        let mut ret = vec![];

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut items = Row::with_capacity(columns.len());

                    for (index, name) in columns.iter().enumerate() {
                        let value = row
                            .get_ref(index)
                            .map_err(Error::driver_operation_failed)?;
                        items.insert(name.clone(), Value::from_sql(value).into_inner());
                    }

                    ret.push(items);
                }
                Ok(None) => break,
                Err(err) => {
                    return Err(Error::driver_operation_failed(err));
                }
            }
        }

        Ok(Response::values(ret))
    }
}

#[async_trait]
impl dbo_core::driver::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::QuerySql(op) => self.query_sql(op),
            Operation::LastInsertId => Ok(Response::value(self.connection.last_insert_rowid())),
            Operation::Raw(sql) => {
                tracing::trace!(sql = %sql, "executing batch");
                self.connection
                    .execute_batch(&sql)
                    .map_err(Error::driver_operation_failed)?;
                Ok(Response::count(0))
            }
        }
    }
}
