use super::{Formatter, Ident, Params, Period, ToSql};

use clause_core::{schema::ObjectMap, Result};

/// Writes a map's qualified table name: `schema.table` when a schema is
/// set, the bare table name otherwise.
pub(super) struct QualifiedName<'a>(pub(super) &'a ObjectMap);

impl ToSql for QualifiedName<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, Period(self.0.name_parts().map(Ident)));
        Ok(())
    }
}
