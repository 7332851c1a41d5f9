use super::{Comma, Formatter, Ident, Params, Placeholder, QualifiedName, ToSql};

use clause_core::{
    stmt::{
        Comparison, ExistsPredicate, FieldPredicate, IsNullPredicate, Predicate, PredicateGroup,
        PropertyPredicate, Value,
    },
    Error, Result,
};

impl ToSql for &Predicate {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self {
            Predicate::Field(pred) => pred.to_sql(f),
            Predicate::Property(pred) => pred.to_sql(f),
            Predicate::IsNull(pred) => pred.to_sql(f),
            Predicate::Exists(pred) => pred.to_sql(f),
            Predicate::Group(pred) => pred.to_sql(f),
            Predicate::Empty => Ok(()),
        }
    }
}

impl ToSql for &FieldPredicate {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let column = f.column(&self.property)?;
        let op = self.op.as_sql(self.negated);

        match self.op {
            Comparison::In => {
                let Value::List(items) = &self.value else {
                    return Err(Error::invalid_operand(
                        &self.property,
                        self.op,
                        "expected a list of values",
                    ));
                };

                // No values to match: the predicate contributes nothing.
                // `IN ()` is not valid SQL.
                if items.is_empty() {
                    return Ok(());
                }

                let placeholders: Vec<Placeholder> = items
                    .iter()
                    .map(|item| f.register_param(&self.property, item))
                    .collect();

                fmt!(f, "(" Ident(column) " " op " (" Comma(&placeholders) "))");
            }
            Comparison::Between => {
                let bounds = match &self.value {
                    Value::List(items) => items,
                    _ => {
                        return Err(Error::invalid_operand(
                            &self.property,
                            self.op,
                            "expected a pair of bounds",
                        ))
                    }
                };

                let [low, high] = &bounds[..] else {
                    return Err(Error::invalid_operand(
                        &self.property,
                        self.op,
                        "expected exactly two bounds",
                    ));
                };

                if low.is_null() || high.is_null() {
                    return Err(Error::invalid_operand(
                        &self.property,
                        self.op,
                        "bounds must be non-null",
                    ));
                }

                let low = f.register_param(&self.property, low);
                let high = f.register_param(&self.property, high);

                fmt!(f, "(" Ident(column) " " op " " {&low} " AND " {&high} ")");
            }
            _ => {
                // Absent filter: a null operand emits no fragment and
                // registers no parameter.
                if self.value.is_null() {
                    return Ok(());
                }

                if self.value.is_list() {
                    return Err(Error::invalid_operand(
                        &self.property,
                        self.op,
                        "expected a scalar value",
                    ));
                }

                let placeholder = f.register_param(&self.property, &self.value);

                fmt!(f, "(" Ident(column) " " op " " {&placeholder} ")");
            }
        }

        Ok(())
    }
}

impl ToSql for &PropertyPredicate {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if self.op.takes_list() {
            return Err(Error::invalid_operand(
                &self.left,
                self.op,
                "operator is not valid between two columns",
            ));
        }

        let left = f.column(&self.left)?;
        let op = self.op.as_sql(self.negated);

        match &self.right_entity {
            None => {
                let right = f.column(&self.right)?;
                fmt!(f, "(" Ident(left) " " op " " Ident(right) ")");
            }
            Some(entity) => {
                let map = f.serializer.map(entity)?;
                let right = map
                    .column(&self.right)
                    .ok_or_else(|| Error::unknown_property(entity, &self.right))?;

                fmt!(f, "(" Ident(left) " " op " " Ident(map.table.as_str()) "." Ident(right) ")");
            }
        }

        Ok(())
    }
}

impl ToSql for &IsNullPredicate {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let column = f.column(&self.property)?;

        if self.negated {
            fmt!(f, "(" Ident(column) " IS NOT NULL)");
        } else {
            fmt!(f, "(" Ident(column) " IS NULL)");
        }

        Ok(())
    }
}

impl ToSql for &ExistsPredicate {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let map = f.serializer.map(&self.entity)?;
        let body = f.render_scoped(&self.predicate, map)?;

        // An EXISTS with no WHERE body is never meaningful output; the
        // caller built a filter that filters nothing.
        if body.trim().is_empty() {
            return Err(Error::empty_exists(&self.entity));
        }

        let keyword = if self.negated { "NOT EXISTS" } else { "EXISTS" };

        fmt!(f, "(" keyword " (SELECT 1 FROM " QualifiedName(map) " WHERE " body.as_str() "))");

        Ok(())
    }
}

impl ToSql for &PredicateGroup {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let map = f.map;
        let mut rendered = Vec::with_capacity(self.operands.len());

        for operand in self {
            let fragment = f.render_scoped(operand, map)?;

            if !fragment.trim().is_empty() {
                rendered.push(fragment);
            }
        }

        match &rendered[..] {
            // Every child was an absent filter; the group contributes
            // nothing to the outer clause.
            [] => {}
            [only] => f.dst.push_str(only),
            _ => {
                f.dst.push('(');
                f.dst.push_str(&rendered.join(self.op.joiner()));
                f.dst.push(')');
            }
        }

        Ok(())
    }
}
