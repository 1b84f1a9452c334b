//! Complexity and length guards applied before a query leaves the process.

#[cfg(test)]
mod tests;

use crate::{
    error::{ComplexityError, LengthError, ValidateError},
    expr::Expr,
};
use serde::{Deserialize, Serialize};

///
/// ValidationOptions
///
/// Limits enforced by the validator. Omitted keys fall back to the defaults
/// when deserialized.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationOptions {
    pub max_depth: usize,
    pub max_length: usize,
}

impl ValidationOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 5;
    pub const DEFAULT_MAX_LENGTH: usize = 10_000;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_length: Self::DEFAULT_MAX_LENGTH,
        }
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Nesting depth of an expression. A condition is 1; every `and`/`or`/`not`
/// adds one level above its deepest child.
#[must_use]
pub fn compute_depth(expr: &Expr) -> usize {
    match expr {
        Expr::Condition(_) => 1,
        Expr::Not(inner) => 1 + compute_depth(inner),
        Expr::And(children) => 1 + max_child_depth(children),
        Expr::Or(children) => 1 + max_child_depth(children),
    }
}

fn max_child_depth(children: &[Expr]) -> usize {
    children.iter().map(compute_depth).max().unwrap_or(0)
}

/// Length as the platform counts it (UTF-16 code units).
#[must_use]
pub fn query_length(query: &str) -> usize {
    query.encode_utf16().count()
}

pub fn validate_expression_depth(
    expr: &Expr,
    options: &ValidationOptions,
) -> Result<(), ComplexityError> {
    let depth = compute_depth(expr);
    if depth > options.max_depth {
        return Err(ComplexityError {
            depth,
            max_depth: options.max_depth,
        });
    }

    Ok(())
}

pub fn validate_query_string_length(
    query: &str,
    options: &ValidationOptions,
) -> Result<(), LengthError> {
    let length = query_length(query);
    if length > options.max_length {
        return Err(LengthError {
            length,
            max_length: options.max_length,
        });
    }

    Ok(())
}

/// Depth-check the tree, then length-check its serialized form.
pub fn validate_expression(expr: &Expr, options: &ValidationOptions) -> Result<(), ValidateError> {
    validate_expression_depth(expr, options)?;
    validate_query_string_length(&expr.to_string(), options)?;

    Ok(())
}
