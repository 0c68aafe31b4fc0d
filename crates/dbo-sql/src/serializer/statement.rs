use super::{filter::Where, Comma, Ident, Params, ToSql};

use dbo_core::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = Ident(&self.table);
        fmt!(f, "DELETE FROM " table Where(&self.filter));
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let verb = match (self.replace, f.serializer.is_mysql()) {
            (false, _) => "INSERT INTO ",
            (true, true) => "REPLACE INTO ",
            (true, false) => "INSERT OR REPLACE INTO ",
        };
        let table = Ident(&self.table);

        if self.columns.is_empty() {
            // Every column takes its default.
            if f.serializer.is_mysql() {
                fmt!(f, verb table " () VALUES ()");
            } else {
                fmt!(f, verb table " DEFAULT VALUES");
            }
            return;
        }

        let columns = Comma(self.columns.iter().map(Ident));
        let values = Comma(&self.values);
        fmt!(f, verb table " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let returning = &self.returning;
        let table = Ident(&self.table);
        fmt!(f, "SELECT " returning " FROM " table Where(&self.filter));

        if let Some(limit) = self.limit {
            fmt!(f, " LIMIT " limit);
        }
    }
}

impl ToSql for &stmt::Returning {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Returning::All => fmt!(f, "*"),
            stmt::Returning::Count => fmt!(f, "COUNT(*)"),
            stmt::Returning::Columns(columns) => {
                fmt!(f, Comma(columns.iter().map(Ident)));
            }
        }
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = Ident(&self.table);
        let assignments = Comma(&self.assignments);
        fmt!(f, "UPDATE " table " SET " assignments Where(&self.filter));
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let value = &self.value;
        fmt!(f, Ident(&self.column) " = " value);
    }
}
