use clause_core::{
    schema::{Catalog, ObjectMap},
    stmt::{Comparison, Predicate, PropertyPredicate, Value},
};
use clause_sql::Serializer;

use indexmap::IndexMap;
use pretty_assertions::assert_eq;

fn catalog() -> Catalog {
    let user = ObjectMap::builder("User")
        .table("Users")
        .column("Id", "Id")
        .column("Age", "Age")
        .column("Name", "Name")
        .column("Score", "Score")
        .column("RetirementAge", "RetirementAge")
        .build()
        .unwrap();

    let order = ObjectMap::builder("Order")
        .schema("dbo")
        .table("Orders")
        .column("Id", "Id")
        .column("UserId", "UserId")
        .column("Total", "Total")
        .build()
        .unwrap();

    Catalog::from_maps([user, order]).unwrap()
}

fn render(predicate: &Predicate) -> (String, IndexMap<String, Value>) {
    let catalog = catalog();
    let serializer = Serializer::mssql(&catalog);
    let mut params = IndexMap::new();

    let sql = serializer.serialize("User", predicate, &mut params).unwrap();
    (sql, params)
}

#[test]
fn scalar_comparison() {
    let pred = Predicate::field("Age", Comparison::Gt, 21);
    let (sql, params) = render(&pred);

    assert_eq!(sql, "(Age > @Age_0)");
    assert_eq!(params.len(), 1);
    assert_eq!(params.get("Age_0"), Some(&Value::I32(21)));
}

#[test]
fn in_list_registers_one_parameter_per_element() {
    let pred = Predicate::in_list("Name", ["a", "b"]);
    let (sql, params) = render(&pred);

    assert_eq!(sql, "(Name IN (@Name_0, @Name_1))");
    assert_eq!(params.get("Name_0"), Some(&Value::from("a")));
    assert_eq!(params.get("Name_1"), Some(&Value::from("b")));
}

#[test]
fn empty_in_list_renders_nothing() {
    let pred = Predicate::in_list("Name", Vec::<String>::new());
    let (sql, params) = render(&pred);

    assert_eq!(sql, "");
    assert!(params.is_empty());
}

#[test]
fn null_value_renders_nothing() {
    let pred = Predicate::eq("Name", Value::Null);
    let (sql, params) = render(&pred);

    assert_eq!(sql, "");
    assert!(params.is_empty());
}

#[test]
fn absent_filter_from_option() {
    let name: Option<String> = None;
    let pred = Predicate::eq("Name", name);
    let (sql, _) = render(&pred);

    assert_eq!(sql, "");
}

#[test]
fn group_drops_noop_children() {
    let pred: Predicate = Predicate::and()
        .with(Predicate::gt("Age", 21))
        .with(Predicate::eq("Name", Value::Null))
        .into();

    let (sql, params) = render(&pred);

    assert_eq!(sql, "(Age > @Age_0)");
    assert_eq!(params.len(), 1);
}

#[test]
fn group_of_noops_renders_nothing() {
    let pred: Predicate = Predicate::or()
        .with(Predicate::empty())
        .with(Predicate::eq("Name", Value::Null))
        .with(Predicate::in_list("Name", Vec::<String>::new()))
        .into();

    let (sql, params) = render(&pred);

    assert_eq!(sql, "");
    assert!(params.is_empty());
}

#[test]
fn group_with_noops_matches_group_without() {
    let padded: Predicate = Predicate::and()
        .with(Predicate::empty())
        .with(Predicate::gt("Age", 21))
        .with(Predicate::eq("Name", Value::Null))
        .into();

    let bare: Predicate = Predicate::and().with(Predicate::gt("Age", 21)).into();

    assert_eq!(render(&padded), render(&bare));
}

#[test]
fn group_joins_survivors() {
    let pred: Predicate = Predicate::or()
        .with(Predicate::gt("Age", 21))
        .with(Predicate::eq("Name", "a"))
        .into();

    let (sql, params) = render(&pred);

    assert_eq!(sql, "((Age > @Age_0) OR (Name = @Name_1))");
    assert_eq!(params.len(), 2);
}

#[test]
fn nested_groups() {
    let pred: Predicate = Predicate::and()
        .with(Predicate::gt("Age", 21))
        .with(
            Predicate::or()
                .with(Predicate::eq("Name", "a"))
                .with(Predicate::eq("Name", "b")),
        )
        .into();

    let (sql, _) = render(&pred);

    assert_eq!(
        sql,
        "((Age > @Age_0) AND ((Name = @Name_1) OR (Name = @Name_2)))"
    );
}

#[test]
fn between_registers_two_distinct_parameters() {
    let pred = Predicate::between("Score", 10, 20);
    let (sql, params) = render(&pred);

    assert_eq!(sql, "(Score BETWEEN @Score_0 AND @Score_1)");
    assert_eq!(params.len(), 2);
    assert_eq!(params.get("Score_0"), Some(&Value::I32(10)));
    assert_eq!(params.get("Score_1"), Some(&Value::I32(20)));
}

#[test]
fn parameter_counter_spans_the_whole_pass() {
    let pred: Predicate = Predicate::and()
        .with(Predicate::eq("Name", "a"))
        .with(Predicate::eq("Name", "b"))
        .into();

    let (sql, params) = render(&pred);

    assert_eq!(sql, "((Name = @Name_0) AND (Name = @Name_1))");
    assert_eq!(
        params.keys().collect::<Vec<_>>(),
        ["Name_0", "Name_1"]
    );
}

#[test]
fn rendering_twice_yields_identical_text_and_values() {
    let pred: Predicate = Predicate::and()
        .with(Predicate::gt("Age", 21))
        .with(Predicate::in_list("Name", ["a", "b"]))
        .into();

    let (first_sql, first_params) = render(&pred);
    let (second_sql, second_params) = render(&pred);

    assert_eq!(first_sql, second_sql);
    assert_eq!(first_params, second_params);
}

#[test]
fn negated_operators() {
    let (sql, _) = render(&Predicate::not_like("Name", "a%"));
    assert_eq!(sql, "(Name NOT LIKE @Name_0)");

    let (sql, _) = render(&Predicate::not_in("Name", ["a"]));
    assert_eq!(sql, "(Name NOT IN (@Name_0))");

    let (sql, _) = render(&Predicate::not_between("Score", 1, 2));
    assert_eq!(sql, "(Score NOT BETWEEN @Score_0 AND @Score_1)");
}

#[test]
fn begins_with_is_a_trailing_wildcard_like() {
    let (sql, params) = render(&Predicate::begins_with("Name", "Jo"));

    assert_eq!(sql, "(Name LIKE @Name_0)");
    assert_eq!(params.get("Name_0"), Some(&Value::from("Jo%")));
}

#[test]
fn is_null_tests() {
    let (sql, params) = render(&Predicate::is_null("Name"));
    assert_eq!(sql, "(Name IS NULL)");
    assert!(params.is_empty());

    let (sql, _) = render(&Predicate::is_not_null("Name"));
    assert_eq!(sql, "(Name IS NOT NULL)");
}

#[test]
fn property_comparison_registers_no_parameters() {
    let pred = Predicate::property("Age", Comparison::Ge, "RetirementAge");
    let (sql, params) = render(&pred);

    assert_eq!(sql, "(Age >= RetirementAge)");
    assert!(params.is_empty());
}

#[test]
fn property_comparison_across_entities_qualifies_the_right_column() {
    let pred: Predicate = PropertyPredicate::new("Id", Comparison::Eq, "UserId")
        .right_entity("Order")
        .into();

    let (sql, params) = render(&pred);

    assert_eq!(sql, "(Id = Orders.UserId)");
    assert!(params.is_empty());
}

#[test]
fn exists_switches_resolution_scope() {
    // UserId resolves against Order's map, not User's.
    let pred = Predicate::exists("Order", Predicate::eq("UserId", 5));
    let (sql, params) = render(&pred);

    assert_eq!(
        sql,
        "(EXISTS (SELECT 1 FROM dbo.Orders WHERE (UserId = @UserId_0)))"
    );
    assert_eq!(params.get("UserId_0"), Some(&Value::I32(5)));
}

#[test]
fn not_exists() {
    let pred = Predicate::not_exists("Order", Predicate::eq("Id", 5));
    let (sql, _) = render(&pred);

    assert_eq!(
        sql,
        "(NOT EXISTS (SELECT 1 FROM dbo.Orders WHERE (Id = @Id_0)))"
    );
}

#[test]
fn unknown_property_fails_fast() {
    let catalog = catalog();
    let serializer = Serializer::mssql(&catalog);
    let mut params = IndexMap::new();

    let err = serializer
        .serialize("User", &Predicate::eq("Agee", 21), &mut params)
        .unwrap_err();

    assert!(err.is_unknown_property());
    assert_eq!(err.property(), Some("Agee"));
    assert_eq!(err.entity(), Some("User"));
}

#[test]
fn unknown_entity_fails_fast() {
    let catalog = catalog();
    let serializer = Serializer::mssql(&catalog);
    let mut params = IndexMap::new();

    let err = serializer
        .serialize("Invoice", &Predicate::eq("Id", 1), &mut params)
        .unwrap_err();

    assert!(err.is_unknown_entity());
    assert_eq!(err.entity(), Some("Invoice"));
}

#[test]
fn malformed_operands_are_errors() {
    let catalog = catalog();
    let serializer = Serializer::mssql(&catalog);

    // BETWEEN with one bound.
    let pred = Predicate::field("Score", Comparison::Between, Value::List(vec![10.into()]));
    let err = serializer
        .serialize("User", &pred, &mut IndexMap::new())
        .unwrap_err();
    assert!(err.is_invalid_operand());
    assert_eq!(err.op(), Some(Comparison::Between));

    // BETWEEN with a null bound.
    let pred = Predicate::between("Score", 10, Value::Null);
    let err = serializer
        .serialize("User", &pred, &mut IndexMap::new())
        .unwrap_err();
    assert!(err.is_invalid_operand());

    // IN with a scalar operand.
    let pred = Predicate::field("Name", Comparison::In, "a");
    let err = serializer
        .serialize("User", &pred, &mut IndexMap::new())
        .unwrap_err();
    assert!(err.is_invalid_operand());
    assert_eq!(err.property(), Some("Name"));

    // A list operand on a scalar operator.
    let pred = Predicate::field("Name", Comparison::Eq, Value::List(vec!["a".into()]));
    let err = serializer
        .serialize("User", &pred, &mut IndexMap::new())
        .unwrap_err();
    assert!(err.is_invalid_operand());
}

#[test]
fn exists_over_an_empty_body_is_an_error() {
    let catalog = catalog();
    let serializer = Serializer::mssql(&catalog);
    let mut params = IndexMap::new();

    let pred = Predicate::exists("Order", Predicate::eq("Total", Value::Null));
    let err = serializer.serialize("User", &pred, &mut params).unwrap_err();

    assert!(err.is_empty_exists());
    assert_eq!(err.entity(), Some("Order"));
    assert!(params.is_empty());
}

#[test]
fn noop_children_register_no_parameters() {
    let pred: Predicate = Predicate::and()
        .with(Predicate::in_list("Name", Vec::<String>::new()))
        .with(Predicate::gt("Age", 21))
        .into();

    let (sql, params) = render(&pred);

    // The dropped IN child consumed no names; Age gets the first slot.
    assert_eq!(sql, "(Age > @Age_0)");
    assert_eq!(params.keys().collect::<Vec<_>>(), ["Age_0"]);
}

#[test]
fn vec_sink_preserves_registration_order() {
    let catalog = catalog();
    let serializer = Serializer::mssql(&catalog);
    let mut params: Vec<(String, Value)> = vec![];

    let pred: Predicate = Predicate::and()
        .with(Predicate::gt("Age", 21))
        .with(Predicate::eq("Name", "a"))
        .into();

    let sql = serializer.serialize("User", &pred, &mut params).unwrap();

    assert_eq!(sql, "((Age > @Age_0) AND (Name = @Name_1))");
    assert_eq!(
        params,
        vec![
            ("Age_0".to_string(), Value::I32(21)),
            ("Name_1".to_string(), Value::from("a")),
        ]
    );
}

#[test]
fn flavors_quote_only_when_needed() {
    let spaced = ObjectMap::builder("Person")
        .table("People Table")
        .column("FirstName", "first name")
        .build()
        .unwrap();
    let catalog = Catalog::from_maps([spaced]).unwrap();

    let pred = Predicate::eq("FirstName", "a");

    let mut params = IndexMap::new();
    let sql = Serializer::mssql(&catalog)
        .serialize("Person", &pred, &mut params)
        .unwrap();
    assert_eq!(sql, "([first name] = @FirstName_0)");

    let mut params = IndexMap::new();
    let sql = Serializer::mysql(&catalog)
        .serialize("Person", &pred, &mut params)
        .unwrap();
    assert_eq!(sql, "(`first name` = @FirstName_0)");

    let mut params = IndexMap::new();
    let sql = Serializer::sqlite(&catalog)
        .serialize("Person", &pred, &mut params)
        .unwrap();
    assert_eq!(sql, "(\"first name\" = @FirstName_0)");

    let mut params = IndexMap::new();
    let sql = Serializer::mssql(&catalog)
        .serialize(
            "Person",
            &Predicate::exists("Person", Predicate::eq("FirstName", "a")),
            &mut params,
        )
        .unwrap();
    assert_eq!(
        sql,
        "(EXISTS (SELECT 1 FROM [People Table] WHERE ([first name] = @FirstName_0)))"
    );
}
