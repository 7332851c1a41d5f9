use std::fmt;

/// The joiner used when combining sibling predicates in a group.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum GroupOp {
    And,
    Or,
}

impl GroupOp {
    /// The SQL joiner text, including the surrounding spaces.
    pub fn joiner(self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

impl fmt::Display for GroupOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => "AND".fmt(f),
            Self::Or => "OR".fmt(f),
        }
    }
}

impl fmt::Debug for GroupOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
