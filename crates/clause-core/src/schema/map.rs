use super::ColumnMapping;
use crate::{Error, Result};

/// Describes how an entity's properties map to a database table or view.
///
/// Constructed once per entity type and read-only thereafter. Render passes
/// borrow the map; predicate trees never own one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectMap {
    /// Entity name, the lookup key within a catalog.
    pub entity: String,

    /// Schema the table lives in, when not the connection default.
    pub schema: Option<String>,

    /// Table or view name.
    pub table: String,

    /// Property-to-column mappings, in declaration order.
    pub columns: Vec<ColumnMapping>,
}

impl ObjectMap {
    /// Starts building a map for `entity`. The table name defaults to the
    /// entity name.
    pub fn builder(entity: impl Into<String>) -> ObjectMapBuilder {
        ObjectMapBuilder {
            entity: entity.into(),
            schema: None,
            table: None,
            columns: vec![],
        }
    }

    /// Resolves a property name to its column name.
    pub fn column(&self, property: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|mapping| mapping.property == property)
            .map(|mapping| mapping.column.as_str())
    }

    /// The parts of the table's qualified name: the schema, when set, then
    /// the table.
    pub fn name_parts(&self) -> impl Iterator<Item = &str> {
        self.schema
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.table.as_str()))
    }
}

/// Builds an [`ObjectMap`], validating it on [`build`](Self::build).
#[derive(Debug)]
pub struct ObjectMapBuilder {
    entity: String,
    schema: Option<String>,
    table: Option<String>,
    columns: Vec<ColumnMapping>,
}

impl ObjectMapBuilder {
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Maps `property` to `column`. Declaration order is preserved.
    pub fn column(mut self, property: impl Into<String>, column: impl Into<String>) -> Self {
        self.columns.push(ColumnMapping::new(property, column));
        self
    }

    /// Maps a property to a column of the same name.
    pub fn column_same(self, property: impl Into<String>) -> Self {
        let property = property.into();
        let column = property.clone();
        self.column(property, column)
    }

    /// Validates and finishes the map.
    ///
    /// Each property name must map to exactly one column; a duplicate is a
    /// configuration error naming the offending property.
    pub fn build(self) -> Result<ObjectMap> {
        if self.entity.is_empty() {
            crate::bail!("object map requires a non-empty entity name");
        }

        for (i, mapping) in self.columns.iter().enumerate() {
            if mapping.property.is_empty() {
                crate::bail!("object map for `{}` has an empty property name", self.entity);
            }

            if self.columns[..i]
                .iter()
                .any(|prior| prior.property == mapping.property)
            {
                return Err(Error::duplicate_property(&self.entity, &mapping.property));
            }
        }

        let table = self.table.unwrap_or_else(|| self.entity.clone());

        Ok(ObjectMap {
            entity: self.entity,
            schema: self.schema,
            table,
            columns: self.columns,
        })
    }
}
