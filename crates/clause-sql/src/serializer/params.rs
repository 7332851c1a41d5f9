use super::{Formatter, ToSql};

use clause_core::{stmt::Value, Result};
use indexmap::IndexMap;

/// The parameter sink: an append-only, ordered collection of name-value
/// pairs populated during a render pass and later bound to a command.
///
/// One sink serves one render pass. Sharing a sink across passes keeps the
/// generated names unique but interleaves unrelated parameters.
pub trait Params {
    /// Appends a value under a generated name.
    fn push(&mut self, name: &str, value: &Value);

    /// The number of parameters registered so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Params for IndexMap<String, Value> {
    fn push(&mut self, name: &str, value: &Value) {
        self.insert(name.to_string(), value.clone());
    }

    fn len(&self) -> usize {
        IndexMap::len(self)
    }
}

impl Params for Vec<(String, Value)> {
    fn push(&mut self, name: &str, value: &Value) {
        self.push((name.to_string(), value.clone()));
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// A registered parameter's generated name.
///
/// Renders as `@name`; the supported flavors' drivers all accept
/// `@`-prefixed named parameters.
pub struct Placeholder(pub String);

impl ToSql for &Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        f.dst.push('@');
        f.dst.push_str(&self.0);
        Ok(())
    }
}
