use super::*;

/// Compares a mapped property against a bound value.
///
/// The value never appears in the SQL text; the renderer registers it in the
/// parameter sink and emits a placeholder. A null value renders to nothing,
/// which is the "absent filter" convention for optional query criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPredicate {
    /// Property name, resolved to a column via the entity's object map.
    pub property: String,

    /// The comparison operator.
    pub op: Comparison,

    /// The bound operand. `Between` expects a two-element list, `In` any
    /// list; all other operators take a scalar.
    pub value: Value,

    /// When `true`, the operator renders in its negated form.
    pub negated: bool,
}

impl FieldPredicate {
    pub fn new(property: impl Into<String>, op: Comparison, value: impl Into<Value>) -> Self {
        Self {
            property: property.into(),
            op,
            value: value.into(),
            negated: false,
        }
    }

    /// Flips the operator polarity.
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }
}

impl Predicate {
    pub fn field(
        property: impl Into<String>,
        op: Comparison,
        value: impl Into<Value>,
    ) -> Self {
        FieldPredicate::new(property, op, value).into()
    }

    pub fn eq(property: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::field(property, Comparison::Eq, value)
    }

    pub fn ne(property: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::field(property, Comparison::Ne, value)
    }

    pub fn ge(property: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::field(property, Comparison::Ge, value)
    }

    pub fn gt(property: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::field(property, Comparison::Gt, value)
    }

    pub fn le(property: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::field(property, Comparison::Le, value)
    }

    pub fn lt(property: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::field(property, Comparison::Lt, value)
    }

    pub fn like(property: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::field(property, Comparison::Like, pattern.into())
    }

    pub fn not_like(property: impl Into<String>, pattern: impl Into<String>) -> Self {
        FieldPredicate::new(property, Comparison::Like, pattern.into())
            .negate()
            .into()
    }

    /// Matches values starting with `prefix`, as a `LIKE` with a trailing
    /// wildcard.
    pub fn begins_with(property: impl Into<String>, prefix: impl Into<String>) -> Self {
        let pattern = format!("{}%", prefix.into());
        Self::field(property, Comparison::Like, pattern)
    }

    pub fn between(
        property: impl Into<String>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        Self::field(
            property,
            Comparison::Between,
            Value::List(vec![low.into(), high.into()]),
        )
    }

    pub fn not_between(
        property: impl Into<String>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        FieldPredicate::new(
            property,
            Comparison::Between,
            Value::List(vec![low.into(), high.into()]),
        )
        .negate()
        .into()
    }

    pub fn in_list<T>(property: impl Into<String>, items: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Value>,
    {
        let items = items.into_iter().map(Into::into).collect();
        Self::field(property, Comparison::In, Value::List(items))
    }

    pub fn not_in<T>(property: impl Into<String>, items: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Value>,
    {
        let items = items.into_iter().map(Into::into).collect();
        FieldPredicate::new(property, Comparison::In, Value::List(items))
            .negate()
            .into()
    }
}

impl From<FieldPredicate> for Predicate {
    fn from(value: FieldPredicate) -> Self {
        Self::Field(value)
    }
}
