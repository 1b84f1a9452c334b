use super::{Condition, Expr, LogicalOp};
use std::fmt;

///
/// Parent
///
/// Syntactic context a node is rendered in.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Parent {
    Junction(LogicalOp),
    Not,
}

/// Serialize an expression into the platform query grammar.
///
/// Junctions are parenthesized unless rendered directly inside a junction
/// of the same connective. The root has no parent, so a top-level junction
/// is always parenthesized. `not` always parenthesizes its operand.
#[must_use]
pub fn to_query_string(expr: &Expr) -> String {
    expr.to_string()
}

pub(super) fn write_expr(
    f: &mut fmt::Formatter<'_>,
    expr: &Expr,
    parent: Option<Parent>,
) -> fmt::Result {
    match expr {
        Expr::Condition(cond) => write_condition(f, cond),
        Expr::And(children) => write_junction(f, LogicalOp::And, children, parent),
        Expr::Or(children) => write_junction(f, LogicalOp::Or, children, parent),
        Expr::Not(inner) => {
            f.write_str("not (")?;
            write_expr(f, inner, Some(Parent::Not))?;
            f.write_str(")")
        }
    }
}

fn write_condition(f: &mut fmt::Formatter<'_>, cond: &Condition) -> fmt::Result {
    write!(f, "{} {} {}", cond.field, cond.operator, cond.value)
}

fn write_junction(
    f: &mut fmt::Formatter<'_>,
    op: LogicalOp,
    children: &[Expr],
    parent: Option<Parent>,
) -> fmt::Result {
    let bare = parent == Some(Parent::Junction(op));

    if !bare {
        f.write_str("(")?;
    }
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, " {} ", op.keyword())?;
        }
        write_expr(f, child, Some(Parent::Junction(op)))?;
    }
    if !bare {
        f.write_str(")")?;
    }

    Ok(())
}
