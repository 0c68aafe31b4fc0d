mod connections;
pub use connections::Connections;

pub mod db;
pub use db::{Db, Handle};

mod find;
pub use find::{Find, FindMode, Found};

mod model;
pub use model::Model;

mod record;
pub use record::Record;

pub use dbo_core::{
    driver,
    schema::{self, Column, Schema},
    stmt::{self, BinaryOp, Type, Value},
    Error, Result,
};
