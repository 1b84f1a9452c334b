//! Platform built-in functions (`TODAY()`, `LOGINUSER()`, ...) modeled as
//! tagged values so the serializer can emit call syntax instead of a quoted
//! string literal.


use crate::expr::write_text_literal;
use std::fmt;

///
/// FunctionKind
///
/// Value family a built-in function evaluates to on the platform.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FunctionKind {
    Date,
    User,
}

///
/// DateUnit
///
/// Unit argument accepted by `FROM_TODAY`.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DateUnit {
    Days,
    Weeks,
    Months,
    Years,
}

impl DateUnit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Days => "DAYS",
            Self::Weeks => "WEEKS",
            Self::Months => "MONTHS",
            Self::Years => "YEARS",
        }
    }
}

impl fmt::Display for DateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// FunctionArg
///
/// A single argument inside a function call. Nested calls are allowed.
///

#[derive(Clone, Debug, PartialEq)]
pub enum FunctionArg {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Function(Box<Function>),
}

impl fmt::Display for FunctionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write_text_literal(f, text),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Function(func) => write!(f, "{func}"),
        }
    }
}

impl From<&str> for FunctionArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FunctionArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FunctionArg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FunctionArg {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for FunctionArg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FunctionArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateUnit> for FunctionArg {
    fn from(value: DateUnit) -> Self {
        Self::Text(value.as_str().to_string())
    }
}

impl From<Function> for FunctionArg {
    fn from(value: Function) -> Self {
        Self::Function(Box::new(value))
    }
}

///
/// Function
///
/// Tagged platform function call. Rendered as `NAME()` or `NAME(a, b)`.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    kind: FunctionKind,
    name: String,
    args: Vec<FunctionArg>,
}

impl Function {
    pub fn new<I>(kind: FunctionKind, name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FunctionArg>,
    {
        Self {
            kind,
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn nullary(kind: FunctionKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FunctionKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn args(&self) -> &[FunctionArg] {
        &self.args
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

/// Render a function marker as literal call syntax.
#[must_use]
pub fn format_function(func: &Function) -> String {
    func.to_string()
}

///
/// DateFunction
///
/// A function known to yield a date; accepted by date and datetime fields.
///

#[derive(Clone, Debug, PartialEq)]
pub struct DateFunction(Function);

impl DateFunction {
    #[must_use]
    pub const fn as_function(&self) -> &Function {
        &self.0
    }

    #[must_use]
    pub fn into_function(self) -> Function {
        self.0
    }
}

impl From<DateFunction> for Function {
    fn from(value: DateFunction) -> Self {
        value.0
    }
}

impl fmt::Display for DateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

///
/// UserFunction
///
/// A function known to yield a user; accepted by user/org/group fields.
///

#[derive(Clone, Debug, PartialEq)]
pub struct UserFunction(Function);

impl UserFunction {
    #[must_use]
    pub const fn as_function(&self) -> &Function {
        &self.0
    }

    #[must_use]
    pub fn into_function(self) -> Function {
        self.0
    }
}

impl From<UserFunction> for Function {
    fn from(value: UserFunction) -> Self {
        value.0
    }
}

impl fmt::Display for UserFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ----------------------------------------------------------------------
// Date functions
// ----------------------------------------------------------------------

fn date(name: &str) -> DateFunction {
    DateFunction(Function::nullary(FunctionKind::Date, name))
}

/// `TODAY()`
#[must_use]
pub fn today() -> DateFunction {
    date("TODAY")
}

/// `NOW()`
#[must_use]
pub fn now() -> DateFunction {
    date("NOW")
}

/// `FROM_TODAY(n, UNIT)`; negative `n` points into the past.
#[must_use]
pub fn from_today(n: i64, unit: DateUnit) -> DateFunction {
    DateFunction(Function::new(
        FunctionKind::Date,
        "FROM_TODAY",
        [FunctionArg::Int(n), FunctionArg::from(unit)],
    ))
}

#[must_use]
pub fn this_week() -> DateFunction {
    date("THIS_WEEK")
}

#[must_use]
pub fn this_month() -> DateFunction {
    date("THIS_MONTH")
}

#[must_use]
pub fn this_year() -> DateFunction {
    date("THIS_YEAR")
}

#[must_use]
pub fn last_week() -> DateFunction {
    date("LAST_WEEK")
}

#[must_use]
pub fn last_month() -> DateFunction {
    date("LAST_MONTH")
}

#[must_use]
pub fn last_year() -> DateFunction {
    date("LAST_YEAR")
}

// ----------------------------------------------------------------------
// User functions
// ----------------------------------------------------------------------

/// `LOGINUSER()`
#[must_use]
pub fn login_user() -> UserFunction {
    UserFunction(Function::nullary(FunctionKind::User, "LOGINUSER"))
}

// ----------------------------------------------------------------------
// Escape hatches for platform functions without a dedicated constructor
// ----------------------------------------------------------------------

/// Build a date-valued function by name, e.g. `THIS_WEEK(SUNDAY)`-style
/// variants the platform adds later.
pub fn custom_date_function<I>(name: impl Into<String>, args: I) -> DateFunction
where
    I: IntoIterator,
    I::Item: Into<FunctionArg>,
{
    DateFunction(Function::new(FunctionKind::Date, name, args))
}

/// Build a user-valued function by name.
pub fn custom_user_function<I>(name: impl Into<String>, args: I) -> UserFunction
where
    I: IntoIterator,
    I::Item: Into<FunctionArg>,
{
    UserFunction(Function::new(FunctionKind::User, name, args))
}
