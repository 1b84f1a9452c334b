
use super::*;
use crate::functions::{login_user, today};

fn cond(field: &str, value: &str) -> Expr {
    condition(field, Operator::Eq, value)
}

// ---- conditions ----

#[test]
fn condition_renders_field_operator_value() {
    assert_eq!(
        condition("会社名", Operator::Eq, "サイボウズ").to_string(),
        r#"会社名 = "サイボウズ""#
    );
}

#[test]
fn embedded_quote_is_escaped() {
    assert_eq!(
        condition("name", Operator::Eq, r#"a"b"#).to_string(),
        r#"name = "a\"b""#
    );
}

#[test]
fn backslash_is_escaped_before_quote() {
    assert_eq!(
        condition("path", Operator::Eq, r#"C:\dir\"x"#).to_string(),
        r#"path = "C:\\dir\\\"x""#
    );
}

#[test]
fn empty_string_renders_as_empty_literal() {
    assert_eq!(condition("a", Operator::Eq, "").to_string(), r#"a = """#);
}

#[test]
fn null_and_absent_render_identically() {
    let null = condition("a", Operator::Eq, FieldValue::Null);
    let absent = condition("a", Operator::Eq, None::<&str>);

    assert_eq!(null.to_string(), "a = null");
    assert_eq!(null.to_string(), absent.to_string());
}

#[test]
fn numbers_and_booleans_are_bare() {
    assert_eq!(condition("n", Operator::Gt, 2).to_string(), "n > 2");
    assert_eq!(condition("n", Operator::Lte, 2.5).to_string(), "n <= 2.5");
    assert_eq!(condition("b", Operator::Eq, true).to_string(), "b = true");
}

#[test]
fn function_values_render_as_calls() {
    assert_eq!(
        condition("期限", Operator::Lt, today()).to_string(),
        "期限 < TODAY()"
    );
}

#[test]
fn lists_format_each_element() {
    let values = FieldValue::List(vec![
        FieldValue::from(login_user()),
        FieldValue::from("sato"),
        FieldValue::from(3),
    ]);

    assert_eq!(
        condition("担当者", Operator::In, values).to_string(),
        r#"担当者 in (LOGINUSER(), "sato", 3)"#
    );
    assert_eq!(
        condition("x", Operator::NotIn, vec!["a", "b"]).to_string(),
        r#"x not in ("a", "b")"#
    );
}

#[test]
fn condition_accessors() {
    let expr = condition("a", Operator::Like, "*x*");
    let Expr::Condition(cond) = &expr else {
        panic!("expected condition");
    };

    assert_eq!(cond.field(), "a");
    assert_eq!(cond.operator(), Operator::Like);
    assert_eq!(cond.value(), &FieldValue::Text("*x*".to_string()));
}

// ---- junctions ----

#[test]
fn empty_junction_is_rejected() {
    assert_eq!(
        and(Vec::new()),
        Err(ExprError::EmptyJunction { op: LogicalOp::And })
    );
    let err = or(Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "OR requires at least one expression");
}

#[test]
fn single_expression_is_returned_unchanged() {
    let x = cond("a", "1");

    assert_eq!(and([x.clone()]).unwrap(), x);
    assert_eq!(or([x.clone()]).unwrap(), x);
}

#[test]
fn top_level_junction_is_parenthesized() {
    let expr = and([cond("a", "1"), cond("b", "2")]).unwrap();

    assert_eq!(expr.to_string(), r#"(a = "1" and b = "2")"#);
}

#[test]
fn same_connective_is_flattened_in_order() {
    let inner = and([cond("b", "2"), cond("c", "3")]).unwrap();
    let expr = and([cond("a", "1"), inner, cond("d", "4")]).unwrap();

    let Expr::And(children) = &expr else {
        panic!("expected and");
    };
    assert_eq!(children.len(), 4);
    assert!(children.iter().all(|c| !matches!(c, Expr::And(_))));
    assert_eq!(
        expr.to_string(),
        r#"(a = "1" and b = "2" and c = "3" and d = "4")"#
    );
}

#[test]
fn or_does_not_absorb_and() {
    let inner = and([cond("b", "2"), cond("c", "3")]).unwrap();
    let expr = or([cond("a", "1"), inner]).unwrap();

    assert_eq!(
        expr.to_string(),
        r#"(a = "1" or (b = "2" and c = "3"))"#
    );
}

#[test]
fn mixed_nesting_parenthesizes_inner_junction() {
    let expr = and([
        cond("A", "1"),
        or([
            condition("B", Operator::Gt, 2),
            not(condition("C", Operator::Ne, "x")),
        ])
        .unwrap(),
    ])
    .unwrap();

    assert_eq!(
        expr.to_string(),
        r#"(A = "1" and (B > 2 or not (C != "x")))"#
    );
    assert_eq!(expr.depth(), 4);
}

#[test]
fn junction_rendered_under_same_parent_is_bare() {
    use std::fmt::Write as _;

    struct Nested<'a>(&'a Expr);

    impl fmt::Display for Nested<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            render::write_expr(f, self.0, Some(render::Parent::Junction(LogicalOp::And)))
        }
    }

    let expr = and([cond("a", "1"), cond("b", "2")]).unwrap();
    let mut out = String::new();
    write!(out, "{}", Nested(&expr)).unwrap();

    assert_eq!(out, r#"a = "1" and b = "2""#);
}

// ---- negation ----

#[test]
fn double_negation_is_preserved() {
    let expr = not(not(cond("a", "1")));

    assert_eq!(expr.to_string(), r#"not (not (a = "1"))"#);
    assert_eq!(expr.depth(), 3);
}

#[test]
fn not_parenthesizes_junction_once() {
    let expr = not(or([cond("a", "1"), cond("b", "2")]).unwrap());

    assert_eq!(expr.to_string(), r#"not ((a = "1" or b = "2"))"#);
}

// ---- operator shorthands ----

#[test]
fn bit_operators_build_flat_junctions() {
    let expr = cond("a", "1") & cond("b", "2") & cond("c", "3");
    assert_eq!(
        expr.to_string(),
        r#"(a = "1" and b = "2" and c = "3")"#
    );

    let expr = !(cond("a", "1") | cond("b", "2"));
    assert_eq!(expr.to_string(), r#"not ((a = "1" or b = "2"))"#);
}

#[test]
fn to_query_string_matches_display() {
    let expr = or([cond("a", "1"), cond("b", "2")]).unwrap();

    assert_eq!(to_query_string(&expr), expr.to_string());
}

#[test]
fn junction_children_reenter_only_their_own_connective() {
    let inner = or([cond("a", "1"), cond("b", "2")]).unwrap();
    let expr = and([inner, cond("c", "3")]).unwrap();

    let Expr::And(children) = expr.clone() else {
        panic!("expected and");
    };
    assert_eq!(Expr::And(children), expr);

    let children = expr.children().unwrap();
    assert_eq!(children.len(), 2);
    assert!(matches!(children[0], Expr::Or(_)));
    assert_eq!(cond("a", "1").children(), None);
}
