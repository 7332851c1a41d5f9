use super::*;

/// Compares two mapped properties, column to column.
///
/// Registers no parameters. Both sides resolve against the current render
/// scope unless `right_entity` names another map in the catalog, in which
/// case the right column renders table-qualified.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPredicate {
    /// Left-hand property name.
    pub left: String,

    /// The comparison operator.
    pub op: Comparison,

    /// Right-hand property name.
    pub right: String,

    /// Entity the right-hand property resolves against, when it is not the
    /// current scope's entity.
    pub right_entity: Option<String>,

    /// When `true`, the operator renders in its negated form.
    pub negated: bool,
}

impl PropertyPredicate {
    pub fn new(left: impl Into<String>, op: Comparison, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            op,
            right: right.into(),
            right_entity: None,
            negated: false,
        }
    }

    /// Resolves the right-hand property against another entity's map.
    pub fn right_entity(mut self, entity: impl Into<String>) -> Self {
        self.right_entity = Some(entity.into());
        self
    }

    /// Flips the operator polarity.
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }
}

impl Predicate {
    pub fn property(
        left: impl Into<String>,
        op: Comparison,
        right: impl Into<String>,
    ) -> Self {
        PropertyPredicate::new(left, op, right).into()
    }
}

impl From<PropertyPredicate> for Predicate {
    fn from(value: PropertyPredicate) -> Self {
        Self::Property(value)
    }
}
