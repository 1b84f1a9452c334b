use super::{OrderDirection, QueryState};
use crate::{
    error::{RangeError, ValidateError},
    expr::Expr,
    validate::ValidationOptions,
};
use std::mem;

///
/// QueryBuilder
///
/// Mutable, chainable facade over [`QueryState`]. Not meant to be shared
/// between threads; clone it instead.
///
/// ```
/// use kintone_query_core::{QueryBuilder, OrderDirection, expr::{Operator, condition}};
///
/// let mut qb = QueryBuilder::new();
/// qb.filter(condition("会社名", Operator::Eq, "サイボウズ"))
///     .order_by("作成日時", OrderDirection::Desc);
/// qb.limit(10)?;
///
/// assert_eq!(
///     qb.build()?,
///     r#"会社名 = "サイボウズ" order by 作成日時 desc limit 10"#,
/// );
/// # Ok::<(), kintone_query_core::QueryError>(())
/// ```
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryBuilder {
    state: QueryState,
}

impl QueryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&mut self, expr: Expr) -> &mut Self {
        self.update(|state| state.filter(expr));
        self
    }

    pub fn order_by(&mut self, field: impl Into<String>, direction: OrderDirection) -> &mut Self {
        self.update(|state| state.order_by(field, direction));
        self
    }

    /// Shorthand for `order_by(field, OrderDirection::Asc)`.
    pub fn order_by_asc(&mut self, field: impl Into<String>) -> &mut Self {
        self.order_by(field, OrderDirection::Asc)
    }

    pub fn order_by_desc(&mut self, field: impl Into<String>) -> &mut Self {
        self.order_by(field, OrderDirection::Desc)
    }

    /// Set the page size. On error the builder is left unchanged.
    pub fn limit(&mut self, value: i64) -> Result<&mut Self, RangeError> {
        self.state = self.state.clone().limit(value)?;
        Ok(self)
    }

    /// Set the offset. On error the builder is left unchanged.
    pub fn offset(&mut self, value: i64) -> Result<&mut Self, RangeError> {
        self.state = self.state.clone().offset(value)?;
        Ok(self)
    }

    pub fn set_validation_options(&mut self, options: ValidationOptions) -> &mut Self {
        self.update(|state| state.with_validation_options(options));
        self
    }

    pub fn build(&self) -> Result<String, ValidateError> {
        self.state.build()
    }

    /// Drop everything back to an empty query with default limits.
    pub fn reset(&mut self) -> &mut Self {
        self.state = QueryState::default();
        self
    }

    #[must_use]
    pub const fn state(&self) -> &QueryState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> QueryState {
        self.state
    }

    fn update(&mut self, f: impl FnOnce(QueryState) -> QueryState) {
        let state = mem::take(&mut self.state);
        self.state = f(state);
    }
}

impl From<QueryState> for QueryBuilder {
    fn from(state: QueryState) -> Self {
        Self { state }
    }
}
