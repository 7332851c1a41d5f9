mod op_comparison;
pub use op_comparison::Comparison;

mod op_group;
pub use op_group::GroupOp;

mod predicate;
pub use predicate::Predicate;

mod predicate_exists;
pub use predicate_exists::ExistsPredicate;

mod predicate_field;
pub use predicate_field::FieldPredicate;

mod predicate_group;
pub use predicate_group::PredicateGroup;

mod predicate_is_null;
pub use predicate_is_null::IsNullPredicate;

mod predicate_property;
pub use predicate_property::PropertyPredicate;

mod value;
pub use value::Value;
