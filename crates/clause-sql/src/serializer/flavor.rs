use super::Serializer;

use clause_core::schema::Catalog;

/// The SQL dialects the serializer can target.
///
/// All three accept `@`-prefixed named parameters, so the flavor only
/// decides identifier quoting.
#[derive(Debug, Clone, Copy)]
pub(super) enum Flavor {
    Mssql,
    Mysql,
    Sqlite,
}

impl Flavor {
    /// The identifier quoting pair for this dialect.
    pub(super) fn quotes(self) -> (char, char) {
        match self {
            Self::Mssql => ('[', ']'),
            Self::Mysql => ('`', '`'),
            Self::Sqlite => ('"', '"'),
        }
    }
}

impl<'a> Serializer<'a> {
    pub fn mssql(catalog: &'a Catalog) -> Serializer<'a> {
        Serializer {
            catalog,
            flavor: Flavor::Mssql,
        }
    }

    pub fn mysql(catalog: &'a Catalog) -> Serializer<'a> {
        Serializer {
            catalog,
            flavor: Flavor::Mysql,
        }
    }

    pub fn sqlite(catalog: &'a Catalog) -> Serializer<'a> {
        Serializer {
            catalog,
            flavor: Flavor::Sqlite,
        }
    }
}
