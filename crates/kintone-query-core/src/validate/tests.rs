use super::*;
use crate::expr::{Operator, and, condition, not, or};

fn leaf() -> Expr {
    condition("a", Operator::Eq, 1)
}

/// `not` chain whose depth is exactly `depth`.
fn nested(depth: usize) -> Expr {
    (1..depth).fold(leaf(), |expr, _| not(expr))
}

// ---- depth ----

#[test]
fn condition_has_depth_one() {
    assert_eq!(compute_depth(&leaf()), 1);
}

#[test]
fn depth_counts_deepest_branch() {
    let expr = and([
        condition("A", Operator::Eq, "1"),
        or([
            condition("B", Operator::Gt, 2),
            not(condition("C", Operator::Ne, "x")),
        ])
        .unwrap(),
    ])
    .unwrap();

    assert_eq!(compute_depth(&expr), 4);
}

#[test]
fn depth_at_limit_passes_and_one_over_fails() {
    let opts = ValidationOptions::default();

    assert!(validate_expression_depth(&nested(5), &opts).is_ok());
    assert_eq!(
        validate_expression_depth(&nested(6), &opts),
        Err(ComplexityError {
            depth: 6,
            max_depth: 5,
        })
    );
}

#[test]
fn custom_max_depth_is_honoured() {
    let opts = ValidationOptions::new().with_max_depth(2);

    assert!(validate_expression_depth(&nested(2), &opts).is_ok());
    let err = validate_expression_depth(&nested(3), &opts).unwrap_err();
    assert_eq!(err.to_string(), "query depth 3 exceeds maximum 2");
}

// ---- length ----

#[test]
fn length_at_limit_passes_and_one_over_fails() {
    let opts = ValidationOptions::new().with_max_length(10);

    assert!(validate_query_string_length(&"x".repeat(10), &opts).is_ok());
    assert_eq!(
        validate_query_string_length(&"x".repeat(11), &opts),
        Err(LengthError {
            length: 11,
            max_length: 10,
        })
    );
}

#[test]
fn default_max_length_is_ten_thousand() {
    let opts = ValidationOptions::default();

    assert!(validate_query_string_length(&"x".repeat(10_000), &opts).is_ok());
    assert!(validate_query_string_length(&"x".repeat(10_001), &opts).is_err());
}

#[test]
fn length_counts_utf16_units() {
    // BMP characters are one unit each; an astral character is two.
    assert_eq!(query_length("会社名"), 3);
    assert_eq!(query_length("𠮷"), 2);

    let opts = ValidationOptions::new().with_max_length(3);
    assert!(validate_query_string_length("会社名", &opts).is_ok());
    assert!(validate_query_string_length("𠮷𠮷", &opts).is_err());
}

// ---- composition ----

#[test]
fn validate_expression_checks_depth_first() {
    let opts = ValidationOptions::new().with_max_depth(1).with_max_length(1);

    assert!(matches!(
        validate_expression(&not(leaf()), &opts),
        Err(ValidateError::Complexity(_))
    ));
}

#[test]
fn validate_expression_checks_serialized_length() {
    let opts = ValidationOptions::new().with_max_length(4);

    // `a = 1` is five characters.
    assert_eq!(
        validate_expression(&leaf(), &opts),
        Err(ValidateError::Length(LengthError {
            length: 5,
            max_length: 4,
        }))
    );
    assert!(validate_expression(&leaf(), &ValidationOptions::default()).is_ok());
}

#[test]
fn options_deserialize_with_defaults() {
    let opts: ValidationOptions = serde_json::from_str(r#"{"max_depth": 8}"#).unwrap();

    assert_eq!(opts.max_depth, 8);
    assert_eq!(opts.max_length, ValidationOptions::DEFAULT_MAX_LENGTH);
}

#[test]
fn options_reject_unknown_keys() {
    let err = serde_json::from_str::<ValidationOptions>(r#"{"max_dept": 3}"#).unwrap_err();

    assert!(err.to_string().contains("max_dept"));
}
