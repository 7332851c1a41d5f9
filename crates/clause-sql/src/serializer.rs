#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Period};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod name;
use name::QualifiedName;

use clause_core::{
    schema::{Catalog, ObjectMap},
    stmt::{Predicate, Value},
    Error, Result,
};

/// Serialize a predicate tree to a SQL `WHERE` fragment.
///
/// The catalog is a shared, read-only lookup; one serializer can run any
/// number of render passes. The parameter sink is per-pass state and must
/// not be shared across concurrent renders.
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Catalog against which entity and property names are resolved
    catalog: &'a Catalog,

    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Object map of the current resolution scope. An EXISTS subquery
    /// switches the scope to its own entity's map.
    map: &'a ObjectMap,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl<'a> Serializer<'a> {
    /// Renders `predicate` against `entity`'s object map.
    ///
    /// Returns the SQL fragment and registers parameters into `params` as a
    /// side effect. The fragment is empty when the whole tree consists of
    /// absent filters; children that render empty register no parameters.
    /// Fails fast on the first unresolvable name or operator/operand
    /// mismatch in depth-first order.
    pub fn serialize(
        &self,
        entity: &str,
        predicate: &Predicate,
        params: &mut impl Params,
    ) -> Result<String> {
        let map = self.map(entity)?;
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            map,
            dst: &mut ret,
            params,
        };

        predicate.to_sql(&mut fmt)?;

        Ok(ret)
    }

    fn map(&self, entity: &str) -> Result<&'a ObjectMap> {
        self.catalog
            .map(entity)
            .ok_or_else(|| Error::unknown_entity(entity))
    }
}

impl<'a, T: Params> Formatter<'a, T> {
    /// Resolves a property name against the current scope's map.
    fn column(&self, property: &str) -> Result<&'a str> {
        self.map
            .column(property)
            .ok_or_else(|| Error::unknown_property(&self.map.entity, property))
    }

    /// Registers `value` under `<property>_<n>`, where `n` is the number of
    /// parameters already in the sink. Names are unique within a render
    /// pass by construction: the counter only grows.
    fn register_param(&mut self, property: &str, value: &Value) -> Placeholder {
        let name = format!("{}_{}", property, self.params.len());
        self.params.push(&name, value);
        Placeholder(name)
    }

    /// Renders `predicate` into a fresh buffer, resolving names against
    /// `map` and sharing this formatter's parameter sink.
    fn render_scoped(&mut self, predicate: &Predicate, map: &'a ObjectMap) -> Result<String> {
        let mut dst = String::new();

        let mut fmt = Formatter {
            serializer: self.serializer,
            map,
            dst: &mut dst,
            params: &mut *self.params,
        };

        predicate.to_sql(&mut fmt)?;

        Ok(dst)
    }
}
