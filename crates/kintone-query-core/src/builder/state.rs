use super::{OrderDirection, OrderSpec, checked_limit, checked_offset};
use crate::{
    error::{RangeError, ValidateError},
    expr::Expr,
    validate::{
        ValidationOptions, compute_depth, query_length, validate_expression_depth,
        validate_query_string_length,
    },
};
use tracing::{debug, warn};

///
/// QueryState
///
/// Immutable snapshot of a query under construction. Setters take the state
/// by value and hand back the successor, so a clone is an independent query.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryState {
    filter: Option<Expr>,
    order: Vec<OrderSpec>,
    limit: Option<u32>,
    offset: Option<u64>,
    validation: ValidationOptions,
}

impl QueryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the filter expression.
    #[must_use]
    pub fn filter(mut self, expr: Expr) -> Self {
        self.filter = Some(expr);
        self
    }

    /// Append an ordering entry; earlier entries keep precedence.
    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, direction: OrderDirection) -> Self {
        self.order.push(OrderSpec::new(field, direction));
        self
    }

    /// Set the page size. Must lie in `1..=MAX_LIMIT`.
    pub fn limit(mut self, value: i64) -> Result<Self, RangeError> {
        self.limit = Some(checked_limit(value)?);
        Ok(self)
    }

    /// Set the number of records to skip. Must be non-negative.
    pub fn offset(mut self, value: i64) -> Result<Self, RangeError> {
        self.offset = Some(checked_offset(value)?);
        Ok(self)
    }

    #[must_use]
    pub const fn with_validation_options(mut self, options: ValidationOptions) -> Self {
        self.validation = options;
        self
    }

    // ---- accessors ----

    #[must_use]
    pub const fn filter_expr(&self) -> Option<&Expr> {
        self.filter.as_ref()
    }

    #[must_use]
    pub fn order(&self) -> &[OrderSpec] {
        &self.order
    }

    #[must_use]
    pub const fn limit_value(&self) -> Option<u32> {
        self.limit
    }

    #[must_use]
    pub const fn offset_value(&self) -> Option<u64> {
        self.offset
    }

    #[must_use]
    pub const fn validation_options(&self) -> &ValidationOptions {
        &self.validation
    }

    /// Render the query string and run the validator over it.
    ///
    /// Segments appear in a fixed order (filter, `order by`, `limit`,
    /// `offset`) joined by single spaces; an empty state renders as `""`.
    /// The filter is depth-checked when present and the whole string is
    /// always length-checked.
    pub fn build(&self) -> Result<String, ValidateError> {
        let query = self.render();

        if let Err(err) = self.check(&query) {
            warn!(error = %err, "query rejected by validator");
            return Err(err);
        }

        debug!(
            length = query_length(&query),
            depth = self.filter.as_ref().map_or(0, compute_depth),
            order_entries = self.order.len(),
            "query built"
        );

        Ok(query)
    }

    fn render(&self) -> String {
        let mut parts = Vec::with_capacity(4);

        if let Some(expr) = &self.filter {
            parts.push(expr.to_string());
        }

        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!("order by {order}"));
        }

        if let Some(limit) = self.limit {
            parts.push(format!("limit {limit}"));
        }

        if let Some(offset) = self.offset {
            parts.push(format!("offset {offset}"));
        }

        parts.join(" ")
    }

    fn check(&self, query: &str) -> Result<(), ValidateError> {
        if let Some(expr) = &self.filter {
            validate_expression_depth(expr, &self.validation)?;
        }
        validate_query_string_length(query, &self.validation)?;

        Ok(())
    }
}
