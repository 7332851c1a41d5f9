use super::{Formatter, Params, ToSql};

use clause_core::Result;

/// An identifier, quoted per flavor when it is not a plain word.
pub(super) struct Ident<S>(pub(super) S);

fn is_plain(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        let name = self.0.as_ref();

        if is_plain(name) {
            f.dst.push_str(name);
            return Ok(());
        }

        let (open, close) = f.serializer.flavor.quotes();

        f.dst.push(open);
        for c in name.chars() {
            f.dst.push(c);
            // Embedded closing quotes are escaped by doubling.
            if c == close {
                f.dst.push(close);
            }
        }
        f.dst.push(close);

        Ok(())
    }
}
