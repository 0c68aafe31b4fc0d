//! Common imports for test files
//!
//! This module provides a convenient way to import frequently used items
//! in test files with `use tests::prelude::*;`

pub use crate::models::{Item, ITEMS_DDL};
#[cfg(feature = "sqlite")]
pub use crate::{setup, Fixture};
pub use crate::{init_tracing, ExecLog};

pub use dbo::{
    driver::Rows, stmt::Statement, BinaryOp, Column, Connections, Db, Find, FindMode, Found,
    Model, Record, Schema, Type, Value,
};
pub use std::sync::Arc;
pub use std_util::prelude::*;
