use super::*;

use std::ops;

/// An ordered list of child predicates joined by AND or OR.
///
/// At render time, children that produce no text are dropped before
/// joining, and a group whose children all produce no text renders to
/// nothing itself. Optional filters therefore compose without ever yielding
/// invalid SQL.
#[derive(Debug, Clone, PartialEq)]
pub struct PredicateGroup {
    /// The joiner applied between surviving children.
    pub op: GroupOp,

    /// Children, rendered in insertion order.
    pub operands: Vec<Predicate>,
}

impl PredicateGroup {
    pub fn new(op: GroupOp) -> Self {
        Self {
            op,
            operands: vec![],
        }
    }

    /// Appends a child predicate.
    pub fn push(&mut self, predicate: impl Into<Predicate>) {
        self.operands.push(predicate.into());
    }

    /// Appends a child predicate, chaining.
    pub fn with(mut self, predicate: impl Into<Predicate>) -> Self {
        self.push(predicate);
        self
    }
}

impl Predicate {
    /// Starts a new, empty AND group.
    pub fn and() -> PredicateGroup {
        PredicateGroup::new(GroupOp::And)
    }

    /// Starts a new, empty OR group.
    pub fn or() -> PredicateGroup {
        PredicateGroup::new(GroupOp::Or)
    }

    /// Collapses a list of predicates into an AND of all of them.
    pub fn all(operands: Vec<Predicate>) -> Predicate {
        Self::group_from_vec(GroupOp::And, operands)
    }

    /// Collapses a list of predicates into an OR of any of them.
    pub fn any(operands: Vec<Predicate>) -> Predicate {
        Self::group_from_vec(GroupOp::Or, operands)
    }

    fn group_from_vec(op: GroupOp, operands: Vec<Predicate>) -> Predicate {
        if operands.is_empty() {
            return Self::Empty;
        }

        if operands.len() == 1 {
            return operands.into_iter().next().unwrap();
        }

        PredicateGroup { op, operands }.into()
    }
}

impl ops::Deref for PredicateGroup {
    type Target = [Predicate];

    fn deref(&self) -> &Self::Target {
        self.operands.deref()
    }
}

impl<'a> IntoIterator for &'a PredicateGroup {
    type IntoIter = std::slice::Iter<'a, Predicate>;
    type Item = &'a Predicate;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl From<PredicateGroup> for Predicate {
    fn from(value: PredicateGroup) -> Self {
        Self::Group(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_collapses_trivial_shapes() {
        assert_eq!(Predicate::all(vec![]), Predicate::Empty);

        let single = Predicate::eq("Age", 21);
        assert_eq!(Predicate::all(vec![single.clone()]), single);

        let pair = Predicate::all(vec![Predicate::eq("Age", 21), Predicate::eq("Name", "a")]);
        let Predicate::Group(group) = pair else {
            panic!("expected a group");
        };
        assert_eq!(group.op, GroupOp::And);
        assert_eq!(group.len(), 2);
    }
}
