use super::{Ident, Params, ToSql};

use dbo_core::stmt;

/// ` WHERE a = ? AND b > ?`, or nothing for an empty filter.
pub(super) struct Where<'a>(pub(super) &'a stmt::Filter);

impl ToSql for Where<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        if self.0.is_empty() {
            return;
        }

        let filter = self.0;
        fmt!(f, " WHERE " filter);
    }
}

impl ToSql for &stmt::Filter {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let mut s = "";
        for condition in &self.conditions {
            fmt!(f, s condition);
            s = " AND ";
        }
    }
}

impl ToSql for &stmt::Condition {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let column = Ident(&self.column);
        let value = &self.value;
        fmt!(f, column " " self.op.as_sql() " " value);
    }
}
