/// A single property-to-column mapping.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnMapping {
    /// The property name callers build predicates against.
    pub property: String,

    /// The name of the column in the database.
    pub column: String,
}

impl ColumnMapping {
    pub fn new(property: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            column: column.into(),
        }
    }
}
