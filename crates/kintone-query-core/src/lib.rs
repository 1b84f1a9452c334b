//! Core of the kintone query toolkit: the filter expression tree and its
//! serializer, platform function markers, typed field wrappers, the
//! validator, and the query builder.
//!
//! Everything here is pure and synchronous. Nothing performs I/O.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod builder;
pub mod error;
pub mod expr;
pub mod field;
pub mod functions;
pub mod validate;

// re-exports
pub use builder::{MAX_LIMIT, OrderDirection, OrderSpec, QueryBuilder, QueryState};
pub use error::QueryError;
pub use validate::ValidationOptions;

///
/// Prelude
///
/// Vocabulary needed to write queries: constructors, field traits and the
/// builder. Errors are left at `crate::error`.
///

pub mod prelude {
    pub use crate::{
        builder::{OrderDirection, QueryBuilder, QueryState},
        expr::{Expr, FieldValue, Operator, and, condition, not, or},
        field::{ChoiceOption, Comparison, Equality, Field, Membership, TextMatch},
        functions::{
            DateUnit, from_today, last_month, last_week, last_year, login_user, now, this_month,
            this_week, this_year, today,
        },
        validate::ValidationOptions,
    };
}
