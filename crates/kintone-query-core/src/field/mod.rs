//! Typed field wrappers.
//!
//! Each wrapper implements only the operator traits its kintone field type
//! supports, so an unsupported comparison (say `equals` on a dropdown) is a
//! compile error rather than a request the REST API rejects.
//!
//! Field codes are `&'static str` so wrappers are `Copy` and can live in
//! `const` items such as a generated `QUERY_FIELDS`. A code only known at
//! run time has no wrapper; build its conditions with
//! [`condition`](crate::expr::condition), which takes any `Into<String>`.

mod kind;
mod types;


use crate::expr::{Expr, FieldValue, LogicalOp, Operator, condition};

// re-exports
pub use kind::{FieldType, UnknownFieldType};
pub use types::*;

///
/// Field
///
/// Common surface of every wrapper: the field code and the value type its
/// operators accept.
///

pub trait Field {
    type Value: Into<FieldValue>;

    fn code(&self) -> &'static str;
}

///
/// Equality
///
/// `=` and `!=`.
///

pub trait Equality: Field {
    fn equals(&self, value: impl Into<Self::Value>) -> Expr {
        condition(self.code(), Operator::Eq, scalar::<Self, _>(value))
    }

    fn not_equals(&self, value: impl Into<Self::Value>) -> Expr {
        condition(self.code(), Operator::Ne, scalar::<Self, _>(value))
    }
}

///
/// Membership
///
/// `in` and `not in` over a list of values.
///

pub trait Membership: Field {
    fn in_list<I>(&self, values: I) -> Expr
    where
        I: IntoIterator,
        I::Item: Into<Self::Value>,
    {
        condition(self.code(), Operator::In, list::<Self, I>(values))
    }

    fn not_in<I>(&self, values: I) -> Expr
    where
        I: IntoIterator,
        I::Item: Into<Self::Value>,
    {
        condition(self.code(), Operator::NotIn, list::<Self, I>(values))
    }
}

///
/// Comparison
///
/// Ordering operators plus an inclusive `between`.
///

pub trait Comparison: Field {
    fn greater_than(&self, value: impl Into<Self::Value>) -> Expr {
        condition(self.code(), Operator::Gt, scalar::<Self, _>(value))
    }

    fn less_than(&self, value: impl Into<Self::Value>) -> Expr {
        condition(self.code(), Operator::Lt, scalar::<Self, _>(value))
    }

    fn greater_than_or_equal(&self, value: impl Into<Self::Value>) -> Expr {
        condition(self.code(), Operator::Gte, scalar::<Self, _>(value))
    }

    fn less_than_or_equal(&self, value: impl Into<Self::Value>) -> Expr {
        condition(self.code(), Operator::Lte, scalar::<Self, _>(value))
    }

    /// `min <= field <= max`, both bounds inclusive.
    fn between(&self, min: impl Into<Self::Value>, max: impl Into<Self::Value>) -> Expr {
        Expr::flattened(
            LogicalOp::And,
            [
                self.greater_than_or_equal(min),
                self.less_than_or_equal(max),
            ],
        )
    }
}

///
/// TextMatch
///
/// `like` / `not like` and the wildcard conveniences built on them.
///

pub trait TextMatch: Field {
    fn like(&self, pattern: impl Into<String>) -> Expr {
        condition(self.code(), Operator::Like, pattern.into())
    }

    fn not_like(&self, pattern: impl Into<String>) -> Expr {
        condition(self.code(), Operator::NotLike, pattern.into())
    }

    fn contains(&self, text: &str) -> Expr {
        self.like(format!("*{text}*"))
    }

    fn starts_with(&self, text: &str) -> Expr {
        self.like(format!("{text}*"))
    }

    fn ends_with(&self, text: &str) -> Expr {
        self.like(format!("*{text}"))
    }
}

// ----------------------------------------------------------------------
// Internal helpers
// ----------------------------------------------------------------------

fn scalar<F, V>(value: V) -> FieldValue
where
    F: Field + ?Sized,
    V: Into<F::Value>,
{
    Into::<F::Value>::into(value).into()
}

fn list<F, I>(values: I) -> FieldValue
where
    F: Field + ?Sized,
    I: IntoIterator,
    I::Item: Into<F::Value>,
{
    FieldValue::List(values.into_iter().map(scalar::<F, I::Item>).collect())
}
