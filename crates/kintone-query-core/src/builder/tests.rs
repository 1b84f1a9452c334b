use super::*;
use crate::{
    error::{LengthError, ValidateError},
    expr::{Expr, Operator, and, condition, not},
    validate::ValidationOptions,
};

fn cond1() -> Expr {
    condition("cond1", Operator::Eq, 1)
}

fn cond2() -> Expr {
    condition("cond2", Operator::Eq, 2)
}

// ---- fluent builder ----

#[test]
fn empty_builder_renders_empty_string() {
    assert_eq!(QueryBuilder::new().build().unwrap(), "");
}

#[test]
fn all_segments_in_fixed_order() {
    let mut qb = QueryBuilder::new();
    qb.filter(and([cond1(), cond2()]).unwrap())
        .order_by("createdAt", OrderDirection::Desc);
    qb.limit(100).unwrap().offset(50).unwrap();

    assert_eq!(
        qb.build().unwrap(),
        "(cond1 = 1 and cond2 = 2) order by createdAt desc limit 100 offset 50"
    );
}

#[test]
fn segments_are_order_independent_of_calls() {
    let mut qb = QueryBuilder::new();
    qb.offset(5).unwrap().limit(10).unwrap();
    qb.order_by_asc("a").filter(cond1());

    assert_eq!(
        qb.build().unwrap(),
        "cond1 = 1 order by a asc limit 10 offset 5"
    );
}

#[test]
fn order_by_accumulates() {
    let mut qb = QueryBuilder::new();
    qb.order_by_desc("更新日時")
        .order_by("レコード番号", OrderDirection::default());

    assert_eq!(
        qb.build().unwrap(),
        "order by 更新日時 desc, レコード番号 asc"
    );
    assert_eq!(qb.state().order().len(), 2);
}

#[test]
fn filter_replaces_previous_filter() {
    let mut qb = QueryBuilder::new();
    qb.filter(cond1()).filter(cond2());

    assert_eq!(qb.build().unwrap(), "cond2 = 2");
}

#[test]
fn limit_bounds() {
    let mut qb = QueryBuilder::new();

    assert_eq!(
        qb.limit(0).unwrap_err(),
        RangeError::LimitTooSmall { value: 0 }
    );
    assert_eq!(
        qb.limit(501).unwrap_err(),
        RangeError::LimitTooLarge {
            value: 501,
            max: MAX_LIMIT,
        }
    );
    assert!(qb.limit(1).is_ok());
    assert!(qb.limit(500).is_ok());
    assert_eq!(qb.state().limit_value(), Some(500));
}

#[test]
fn limit_error_messages() {
    let mut qb = QueryBuilder::new();

    assert_eq!(
        qb.limit(-3).unwrap_err().to_string(),
        "limit must be at least 1 (got -3)"
    );
    assert_eq!(
        qb.limit(1_000).unwrap_err().to_string(),
        "limit 1000 exceeds platform maximum of 500 records per request"
    );
}

#[test]
fn offset_bounds() {
    let mut qb = QueryBuilder::new();

    assert_eq!(
        qb.offset(-1).unwrap_err(),
        RangeError::NegativeOffset { value: -1 }
    );
    assert!(qb.offset(0).is_ok());
    assert_eq!(qb.build().unwrap(), "offset 0");
}

#[test]
fn failed_setter_leaves_builder_unchanged() {
    let mut qb = QueryBuilder::new();
    qb.limit(20).unwrap();

    assert!(qb.limit(0).is_err());
    assert_eq!(qb.build().unwrap(), "limit 20");
}

#[test]
fn reset_clears_everything() {
    let mut qb = QueryBuilder::new();
    qb.filter(cond1())
        .order_by_desc("a")
        .set_validation_options(ValidationOptions::new().with_max_depth(1));
    qb.limit(3).unwrap();

    qb.reset();

    assert_eq!(qb.state(), &QueryState::default());
    assert_eq!(qb.build().unwrap(), "");
}

#[test]
fn clone_is_independent() {
    let mut original = QueryBuilder::new();
    original.filter(cond1());

    let mut copy = original.clone();
    copy.order_by_desc("b");
    copy.limit(5).unwrap();
    original.order_by_asc("a");

    assert_eq!(original.build().unwrap(), "cond1 = 1 order by a asc");
    assert_eq!(copy.build().unwrap(), "cond1 = 1 order by b desc limit 5");
}

#[test]
fn build_depth_checks_filter() {
    let mut qb = QueryBuilder::new();
    qb.filter(not(not(cond1())))
        .set_validation_options(ValidationOptions::new().with_max_depth(2));

    assert!(matches!(qb.build(), Err(ValidateError::Complexity(_))));
}

#[test]
fn build_length_checks_whole_string() {
    let mut qb = QueryBuilder::new();
    qb.order_by_asc("abc")
        .set_validation_options(ValidationOptions::new().with_max_length(15));

    // `order by abc asc` is sixteen characters.
    assert_eq!(
        qb.build(),
        Err(ValidateError::Length(LengthError {
            length: 16,
            max_length: 15,
        }))
    );

    qb.set_validation_options(ValidationOptions::new().with_max_length(16));
    assert!(qb.build().is_ok());
}

// ---- functional core ----

#[test]
fn state_setters_chain_by_value() {
    let state = QueryState::new()
        .filter(cond1())
        .order_by("createdAt", OrderDirection::Desc)
        .limit(100)
        .and_then(|s| s.offset(50))
        .unwrap();

    assert_eq!(
        state.build().unwrap(),
        "cond1 = 1 order by createdAt desc limit 100 offset 50"
    );
    assert_eq!(state.offset_value(), Some(50));
    assert!(state.filter_expr().is_some());
}

#[test]
fn state_is_a_value() {
    let base = QueryState::new().filter(cond1());
    let ordered = base.clone().order_by("a", OrderDirection::Asc);

    assert_eq!(base.build().unwrap(), "cond1 = 1");
    assert_eq!(ordered.build().unwrap(), "cond1 = 1 order by a asc");
}

#[test]
fn state_and_builder_agree() {
    let state = QueryState::new()
        .filter(cond2())
        .with_validation_options(ValidationOptions::new().with_max_depth(3));
    let qb = QueryBuilder::from(state.clone());

    assert_eq!(qb.build(), state.build());
    assert_eq!(qb.state().validation_options().max_depth, 3);
    assert_eq!(qb.into_state(), state);
}

#[test]
fn order_spec_display() {
    assert_eq!(
        OrderSpec::new("f", OrderDirection::Desc).to_string(),
        "f desc"
    );
    assert_eq!(OrderDirection::default(), OrderDirection::Asc);
}
