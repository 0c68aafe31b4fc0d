use crate::logging_driver::DriverOp;
use dbo_core::{
    driver::{Operation, Response},
    stmt::Statement,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

/// A wrapper around the operations log that provides a clean API for tests
#[derive(Debug, Clone)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
    connects: Arc<AtomicUsize>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>, connects: Arc<AtomicUsize>) -> Self {
        Self { ops, connects }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Number of connections opened so far
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    /// Clear the log and the connection counter
    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
        self.connects.store(0, Ordering::SeqCst);
    }

    /// Remove and return the first operation from the log
    pub fn pop(&mut self) -> Option<(Operation, Result<Response, String>)> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            let driver_op = ops.remove(0);
            Some((driver_op.operation, driver_op.response))
        }
    }

    /// Pops the next operation, which must be a statement, and returns it
    /// with its response.
    pub fn pop_stmt(&mut self) -> (Statement, Result<Response, String>) {
        match self.pop() {
            Some((Operation::QuerySql(op), response)) => (op.stmt, response),
            other => panic!("expected a statement; actual={other:#?}"),
        }
    }
}
