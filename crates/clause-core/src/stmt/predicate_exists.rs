use super::*;

/// Wraps a child predicate in an `EXISTS (SELECT 1 FROM … WHERE …)` test.
///
/// The child resolves against `entity`'s object map, not the map of the
/// query the node is embedded in.
#[derive(Debug, Clone, PartialEq)]
pub struct ExistsPredicate {
    /// Entity whose table the subquery selects from.
    pub entity: String,

    /// The subquery's `WHERE` body.
    pub predicate: Box<Predicate>,

    /// When `true`, this is a `NOT EXISTS` check.
    pub negated: bool,
}

impl Predicate {
    pub fn exists(entity: impl Into<String>, predicate: impl Into<Predicate>) -> Self {
        ExistsPredicate {
            entity: entity.into(),
            predicate: Box::new(predicate.into()),
            negated: false,
        }
        .into()
    }

    pub fn not_exists(entity: impl Into<String>, predicate: impl Into<Predicate>) -> Self {
        ExistsPredicate {
            entity: entity.into(),
            predicate: Box::new(predicate.into()),
            negated: true,
        }
        .into()
    }
}

impl From<ExistsPredicate> for Predicate {
    fn from(value: ExistsPredicate) -> Self {
        Self::Exists(value)
    }
}
