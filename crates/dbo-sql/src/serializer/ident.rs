use super::{Flavor, Formatter, Params, ToSql};

/// A quoted table or column name. Embedded quote characters are doubled.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let quote = match f.serializer.flavor {
            Flavor::Mysql => '`',
            Flavor::Sqlite => '"',
        };

        f.dst.push(quote);
        for c in self.0.as_ref().chars() {
            if c == quote {
                f.dst.push(quote);
            }
            f.dst.push(c);
        }
        f.dst.push(quote);
    }
}
