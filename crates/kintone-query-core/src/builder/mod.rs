//! Query assembly: filter, ordering and paging.
//!
//! [`QueryState`] is the value-typed core; every setter consumes a state and
//! returns the next one. [`QueryBuilder`] is a thin mutable facade over it.

mod query;
mod state;

#[cfg(test)]
mod tests;

use crate::error::RangeError;
use std::fmt;

// re-exports
pub use query::QueryBuilder;
pub use state::QueryState;

/// Platform ceiling on records returned per request.
pub const MAX_LIMIT: u32 = 500;

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// OrderSpec
///
/// One `field direction` entry of the `order by` clause.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderSpec {
    pub field: String,
    pub direction: OrderDirection,
}

impl OrderSpec {
    #[must_use]
    pub fn new(field: impl Into<String>, direction: OrderDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

impl fmt::Display for OrderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction)
    }
}

// ----------------------------------------------------------------------
// Paging guards
// ----------------------------------------------------------------------

pub(crate) fn checked_limit(value: i64) -> Result<u32, RangeError> {
    if value < 1 {
        return Err(RangeError::LimitTooSmall { value });
    }

    u32::try_from(value)
        .ok()
        .filter(|n| *n <= MAX_LIMIT)
        .ok_or(RangeError::LimitTooLarge {
            value,
            max: MAX_LIMIT,
        })
}

pub(crate) fn checked_offset(value: i64) -> Result<u64, RangeError> {
    u64::try_from(value).map_err(|_| RangeError::NegativeOffset { value })
}
