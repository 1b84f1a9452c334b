//! Filter expression tree and its serializer.
//!
//! Trees are built only through the smart constructors in this module
//! (`condition`, `and`, `or`, `not`), which keep `And`/`Or` nodes flat.

mod render;
mod value;

#[cfg(test)]
mod tests;

use crate::error::ExprError;
use derive_more::Deref;
use std::{fmt, ops};

// re-exports
pub use render::to_query_string;
pub(crate) use value::write_text_literal;
pub use value::FieldValue;

///
/// Operator
///
/// Comparison operators understood by the platform query grammar.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Lt,
    Gte,
    Lte,
    In,
    NotIn,
    Like,
    NotLike,
}

impl Operator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
            Self::In => "in",
            Self::NotIn => "not in",
            Self::Like => "like",
            Self::NotLike => "not like",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// LogicalOp
///
/// Boolean connective of a junction node.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    /// Keyword used between children in the serialized form.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

///
/// Condition
///
/// Leaf node: `field operator value`. The field code is not validated here.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    field: String,
    operator: Operator,
    value: FieldValue,
}

impl Condition {
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub const fn value(&self) -> &FieldValue {
        &self.value
    }
}

// ----------------------------------------------------------------------
// Junction children
// ----------------------------------------------------------------------

macro_rules! children {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Deref, PartialEq)]
        pub struct $name(Vec<Expr>);

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a Expr;
            type IntoIter = std::slice::Iter<'a, Expr>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

children!(
    /// Read-only children of an `And` node: at least two expressions, none
    /// of them a direct `And`.
    Conjunction
);

children!(
    /// Read-only children of an `Or` node: at least two expressions, none
    /// of them a direct `Or`.
    ///
    /// The child lists are distinct types, so children taken out of one
    /// connective cannot be placed under the other:
    ///
    /// ```compile_fail
    /// use kintone_query_core::expr::{Expr, Operator, and, condition, or};
    ///
    /// let inner = or([
    ///     condition("a", Operator::Eq, 1),
    ///     condition("b", Operator::Eq, 2),
    /// ])
    /// .unwrap();
    /// let outer = and([inner, condition("c", Operator::Eq, 3)]).unwrap();
    ///
    /// if let Expr::And(children) = outer {
    ///     let _ = Expr::Or(children);
    /// }
    /// ```
    Disjunction
);

///
/// Expr
///

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Condition(Condition),
    And(Conjunction),
    Or(Disjunction),
    Not(Box<Expr>),
}

impl Expr {
    /// Connective of a junction node, if this is one.
    #[must_use]
    pub const fn logical_op(&self) -> Option<LogicalOp> {
        match self {
            Self::And(_) => Some(LogicalOp::And),
            Self::Or(_) => Some(LogicalOp::Or),
            Self::Condition(_) | Self::Not(_) => None,
        }
    }

    /// Children of a junction node, if this is one.
    #[must_use]
    pub fn children(&self) -> Option<&[Self]> {
        match self {
            Self::And(children) => Some(children.as_slice()),
            Self::Or(children) => Some(children.as_slice()),
            Self::Condition(_) | Self::Not(_) => None,
        }
    }

    /// Nesting depth; see [`crate::validate::compute_depth`].
    #[must_use]
    pub fn depth(&self) -> usize {
        crate::validate::compute_depth(self)
    }

    /// Build a junction from at least two expressions, absorbing children
    /// that already use the same connective.
    pub(crate) fn flattened<I>(op: LogicalOp, exprs: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut out = Vec::new();

        for expr in exprs {
            match (op, expr) {
                (LogicalOp::And, Self::And(children)) => out.extend(children.0),
                (LogicalOp::Or, Self::Or(children)) => out.extend(children.0),
                (_, other) => out.push(other),
            }
        }

        debug_assert!(out.len() >= 2, "junction must hold at least two children");

        match op {
            LogicalOp::And => Self::And(Conjunction(out)),
            LogicalOp::Or => Self::Or(Disjunction(out)),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_expr(f, self, None)
    }
}

// ----------------------------------------------------------------------
// Smart constructors
// ----------------------------------------------------------------------

/// Leaf comparison node.
pub fn condition(field: impl Into<String>, operator: Operator, value: impl Into<FieldValue>) -> Expr {
    Expr::Condition(Condition {
        field: field.into(),
        operator,
        value: value.into(),
    })
}

/// Conjunction. A single expression is returned unchanged.
pub fn and<I>(exprs: I) -> Result<Expr, ExprError>
where
    I: IntoIterator<Item = Expr>,
{
    junction(LogicalOp::And, exprs)
}

/// Disjunction. A single expression is returned unchanged.
pub fn or<I>(exprs: I) -> Result<Expr, ExprError>
where
    I: IntoIterator<Item = Expr>,
{
    junction(LogicalOp::Or, exprs)
}

/// Negation. Always wraps; `not(not(e))` is kept as written.
#[must_use]
pub fn not(expr: Expr) -> Expr {
    Expr::Not(Box::new(expr))
}

fn junction<I>(op: LogicalOp, exprs: I) -> Result<Expr, ExprError>
where
    I: IntoIterator<Item = Expr>,
{
    let mut iter = exprs.into_iter();

    let Some(first) = iter.next() else {
        return Err(ExprError::EmptyJunction { op });
    };
    let Some(second) = iter.next() else {
        return Ok(first);
    };

    Ok(Expr::flattened(op, [first, second].into_iter().chain(iter)))
}

// ----------------------------------------------------------------------
// Operator shorthands
// ----------------------------------------------------------------------

impl ops::BitAnd for Expr {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::flattened(LogicalOp::And, [self, rhs])
    }
}

impl ops::BitOr for Expr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::flattened(LogicalOp::Or, [self, rhs])
    }
}

impl ops::Not for Expr {
    type Output = Self;

    fn not(self) -> Self {
        not(self)
    }
}
