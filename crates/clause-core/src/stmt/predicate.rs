use super::*;

/// A composable node of a SQL `WHERE` clause.
///
/// The variant set is closed; rendering dispatches by matching on it. Trees
/// are caller-constructed and caller-owned, and a node never holds onto the
/// object maps it is eventually rendered against.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Compare a mapped property against a bound value
    Field(FieldPredicate),

    /// Compare two mapped properties, column to column
    Property(PropertyPredicate),

    /// Test a mapped property for SQL `NULL`
    IsNull(IsNullPredicate),

    /// Wrap a child predicate in an `EXISTS` subquery
    Exists(ExistsPredicate),

    /// AND/OR a list of child predicates
    Group(PredicateGroup),

    /// The no-op predicate; renders to nothing
    Empty,
}

impl Predicate {
    /// Returns the no-op predicate.
    ///
    /// Useful as the seed of an optional filter chain: combining it into a
    /// group contributes nothing to the rendered clause.
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Returns `true` if this node is trivially a no-op.
    ///
    /// This is a structural pre-check only. A field comparison with a null
    /// value also renders to nothing, but that decision belongs to the
    /// renderer.
    pub fn is_empty_node(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Group(group) => group.operands.iter().all(Self::is_empty_node),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_detection_recurses_into_groups() {
        let group = Predicate::and()
            .with(Predicate::empty())
            .with(Predicate::or().with(Predicate::empty()));

        assert!(Predicate::from(group).is_empty_node());

        let group = Predicate::and()
            .with(Predicate::empty())
            .with(Predicate::eq("Age", 21));

        assert!(!Predicate::from(group).is_empty_node());
    }
}
