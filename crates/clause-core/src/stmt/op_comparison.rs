use std::fmt;

/// A comparison operator.
///
/// Every operator has a SQL token in both polarities; negating a relational
/// operator flips it to its complement, while `LIKE`/`BETWEEN`/`IN` take a
/// `NOT` prefix.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Ge,
    Gt,
    Le,
    Lt,
    Like,
    Between,
    In,
}

impl Comparison {
    /// Returns the SQL token for this operator in the requested polarity.
    pub fn as_sql(self, negated: bool) -> &'static str {
        use Comparison::*;

        match (self, negated) {
            (Eq, false) => "=",
            (Eq, true) => "<>",
            (Ne, false) => "<>",
            (Ne, true) => "=",
            (Ge, false) => ">=",
            (Ge, true) => "<",
            (Gt, false) => ">",
            (Gt, true) => "<=",
            (Le, false) => "<=",
            (Le, true) => ">",
            (Lt, false) => "<",
            (Lt, true) => ">=",
            (Like, false) => "LIKE",
            (Like, true) => "NOT LIKE",
            (Between, false) => "BETWEEN",
            (Between, true) => "NOT BETWEEN",
            (In, false) => "IN",
            (In, true) => "NOT IN",
        }
    }

    /// True for operators whose operand is a list rather than a scalar.
    pub fn takes_list(self) -> bool {
        matches!(self, Self::Between | Self::In)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_sql(false).fmt(f)
    }
}

impl fmt::Debug for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_total_over_both_polarities() {
        use Comparison::*;

        let all = [Eq, Ne, Ge, Gt, Le, Lt, Like, Between, In];

        for op in all {
            assert!(!op.as_sql(false).is_empty());
            assert!(!op.as_sql(true).is_empty());
        }
    }

    #[test]
    fn negation_flips_relational_operators() {
        assert_eq!(Comparison::Gt.as_sql(true), "<=");
        assert_eq!(Comparison::Le.as_sql(true), ">");
        assert_eq!(Comparison::Eq.as_sql(true), "<>");
    }

    #[test]
    fn negation_prefixes_keyword_operators() {
        assert_eq!(Comparison::Like.as_sql(true), "NOT LIKE");
        assert_eq!(Comparison::Between.as_sql(true), "NOT BETWEEN");
        assert_eq!(Comparison::In.as_sql(true), "NOT IN");
    }
}
