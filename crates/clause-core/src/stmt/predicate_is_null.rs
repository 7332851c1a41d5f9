use super::*;

/// Tests whether a mapped property is SQL `NULL`.
///
/// This is a distinct node rather than an equality against a null value
/// because databases treat null comparisons differently, and because a null
/// operand on a field comparison already means "no filter".
#[derive(Debug, Clone, PartialEq)]
pub struct IsNullPredicate {
    /// Property name, resolved to a column via the entity's object map.
    pub property: String,

    /// When `true`, renders `IS NOT NULL`.
    pub negated: bool,
}

impl Predicate {
    pub fn is_null(property: impl Into<String>) -> Self {
        IsNullPredicate {
            property: property.into(),
            negated: false,
        }
        .into()
    }

    pub fn is_not_null(property: impl Into<String>) -> Self {
        IsNullPredicate {
            property: property.into(),
            negated: true,
        }
        .into()
    }
}

impl From<IsNullPredicate> for Predicate {
    fn from(value: IsNullPredicate) -> Self {
        Self::IsNull(value)
    }
}
