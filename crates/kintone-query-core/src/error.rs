use crate::expr::LogicalOp;
use thiserror::Error as ThisError;

///
/// QueryError
///
/// Root error for everything the query core can reject. Each variant wraps
/// a narrower error so callers can match on the stage that failed.
///

#[derive(Debug, ThisError)]
pub enum QueryError {
    #[error(transparent)]
    Expr(#[from] ExprError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Validate(#[from] ValidateError),
}

///
/// ExprError
///
/// Programmer errors raised while assembling an expression tree.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum ExprError {
    #[error("{} requires at least one expression", .op.label())]
    EmptyJunction { op: LogicalOp },
}

///
/// RangeError
///
/// Out-of-bounds paging values, raised where the value is set.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum RangeError {
    #[error("limit must be at least 1 (got {value})")]
    LimitTooSmall { value: i64 },

    #[error("limit {value} exceeds platform maximum of {max} records per request")]
    LimitTooLarge { value: i64, max: u32 },

    #[error("offset must be non-negative (got {value})")]
    NegativeOffset { value: i64 },
}

///
/// ValidateError
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum ValidateError {
    #[error(transparent)]
    Complexity(#[from] ComplexityError),

    #[error(transparent)]
    Length(#[from] LengthError),
}

///
/// ComplexityError
///
/// Expression tree nested deeper than the configured maximum.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("query depth {depth} exceeds maximum {max_depth}")]
pub struct ComplexityError {
    pub depth: usize,
    pub max_depth: usize,
}

///
/// LengthError
///
/// Serialized query longer than the configured maximum.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("query length {length} exceeds maximum {max_length}")]
pub struct LengthError {
    pub length: usize,
    pub max_length: usize,
}
