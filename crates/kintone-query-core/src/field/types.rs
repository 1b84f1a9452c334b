use super::{Comparison, Equality, Field, FieldType, Membership, TextMatch};
use crate::{
    expr::FieldValue,
    functions::{DateFunction, UserFunction},
};

///
/// Numeric
///
/// Number accepted by number fields.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Numeric> for FieldValue {
    fn from(value: Numeric) -> Self {
        match value {
            Numeric::Int(n) => Self::Int(n),
            Numeric::Float(n) => Self::Float(n),
        }
    }
}

///
/// DateValue
///
/// Literal date/datetime string or a date function such as `TODAY()`.
///

#[derive(Clone, Debug, PartialEq)]
pub enum DateValue {
    Literal(String),
    Function(DateFunction),
}

impl From<&str> for DateValue {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for DateValue {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<DateFunction> for DateValue {
    fn from(value: DateFunction) -> Self {
        Self::Function(value)
    }
}

impl From<DateValue> for FieldValue {
    fn from(value: DateValue) -> Self {
        match value {
            DateValue::Literal(text) => Self::Text(text),
            DateValue::Function(func) => func.into(),
        }
    }
}

///
/// UserValue
///
/// Login name / organization code / group code, or a user function such as
/// `LOGINUSER()`.
///

#[derive(Clone, Debug, PartialEq)]
pub enum UserValue {
    Literal(String),
    Function(UserFunction),
}

impl From<&str> for UserValue {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for UserValue {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<UserFunction> for UserValue {
    fn from(value: UserFunction) -> Self {
        Self::Function(value)
    }
}

impl From<UserValue> for FieldValue {
    fn from(value: UserValue) -> Self {
        match value {
            UserValue::Literal(text) => Self::Text(text),
            UserValue::Function(func) => func.into(),
        }
    }
}

// ----------------------------------------------------------------------
// Wrappers addressed by field code only
// ----------------------------------------------------------------------

macro_rules! code_field {
    (
        $(#[$meta:meta])*
        $name:ident, $ctor:ident, $field_type:expr, $value:ty
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub struct $name {
            code: &'static str,
        }

        impl $name {
            pub const FIELD_TYPE: FieldType = $field_type;

            #[must_use]
            pub const fn field_type(&self) -> FieldType {
                Self::FIELD_TYPE
            }
        }

        impl Field for $name {
            type Value = $value;

            fn code(&self) -> &'static str {
                self.code
            }
        }

        /// The code must be `'static`; see the [module docs](super) for
        /// codes built at run time.
        #[must_use]
        pub const fn $ctor(code: &'static str) -> $name {
            $name { code }
        }
    };
}

code_field!(
    /// Text field: equality, membership and `like` matching.
    StringField,
    create_string_field,
    FieldType::SingleLineText,
    String
);

code_field!(
    /// Number field: equality, membership and ordering.
    NumberField,
    create_number_field,
    FieldType::Number,
    Numeric
);

code_field!(
    /// Date field; values may be date functions.
    DateField,
    create_date_field,
    FieldType::Date,
    DateValue
);

code_field!(
    /// Datetime field; values may be date functions.
    DateTimeField,
    create_date_time_field,
    FieldType::Datetime,
    DateValue
);

code_field!(
    /// Time field (`HH:MM` strings).
    TimeField,
    create_time_field,
    FieldType::Time,
    String
);

code_field!(
    /// User selection field; values may be user functions.
    UserField,
    create_user_field,
    FieldType::UserSelect,
    UserValue
);

code_field!(
    OrgField,
    create_org_field,
    FieldType::OrganizationSelect,
    UserValue
);

code_field!(
    GroupField,
    create_group_field,
    FieldType::GroupSelect,
    UserValue
);

impl Equality for StringField {}
impl Membership for StringField {}
impl TextMatch for StringField {}

impl Equality for NumberField {}
impl Membership for NumberField {}
impl Comparison for NumberField {}

impl Equality for DateField {}
impl Membership for DateField {}
impl Comparison for DateField {}

impl Equality for DateTimeField {}
impl Membership for DateTimeField {}
impl Comparison for DateTimeField {}

impl Equality for TimeField {}
impl Membership for TimeField {}
impl Comparison for TimeField {}

impl Equality for UserField {}
impl Membership for UserField {}

impl Equality for OrgField {}
impl Membership for OrgField {}

impl Equality for GroupField {}
impl Membership for GroupField {}

// ----------------------------------------------------------------------
// Closed-option wrappers
// ----------------------------------------------------------------------

macro_rules! choice_field {
    (
        $(#[$meta:meta])*
        $name:ident, $ctor:ident, $field_type:expr
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub struct $name<O: 'static = &'static str> {
            code: &'static str,
            options: &'static [O],
        }

        impl<O: 'static> $name<O> {
            pub const FIELD_TYPE: FieldType = $field_type;

            #[must_use]
            pub const fn field_type(&self) -> FieldType {
                Self::FIELD_TYPE
            }

            /// Options in form order.
            #[must_use]
            pub const fn options(&self) -> &'static [O] {
                self.options
            }
        }

        impl<O: ChoiceOption> Field for $name<O> {
            type Value = O;

            fn code(&self) -> &'static str {
                self.code
            }
        }

        /// `options` doubles as the value type: a slice of plain labels
        /// accepts any string, a slice of [`ChoiceOption`] enum values only
        /// accepts that enum.
        #[must_use]
        pub const fn $ctor<O: 'static>(code: &'static str, options: &'static [O]) -> $name<O> {
            $name { code, options }
        }
    };
}

///
/// ChoiceOption
///
/// Value of a dropdown, checkbox or radio button field. Generated code
/// declares one enum per choice field so only the labels defined on the form
/// type-check:
///
/// ```
/// use kintone_query_core::{
///     expr::FieldValue,
///     field::{ChoiceOption, Equality, create_radio_button_field},
/// };
///
/// #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
/// enum Rank {
///     A,
///     B,
/// }
///
/// impl ChoiceOption for Rank {
///     fn label(self) -> &'static str {
///         match self {
///             Self::A => "A",
///             Self::B => "B",
///         }
///     }
/// }
///
/// impl From<Rank> for FieldValue {
///     fn from(rank: Rank) -> Self {
///         Self::from(rank.label())
///     }
/// }
///
/// let rank = create_radio_button_field("ランク", &[Rank::A, Rank::B]);
/// assert_eq!(rank.equals(Rank::B).to_string(), r#"ランク = "B""#);
/// ```
///
/// A label outside the enum is rejected at compile time:
///
/// ```compile_fail
/// use kintone_query_core::{
///     expr::FieldValue,
///     field::{ChoiceOption, Equality, create_radio_button_field},
/// };
///
/// #[derive(Clone, Copy)]
/// enum Rank {
///     A,
/// }
///
/// impl ChoiceOption for Rank {
///     fn label(self) -> &'static str {
///         "A"
///     }
/// }
///
/// impl From<Rank> for FieldValue {
///     fn from(rank: Rank) -> Self {
///         Self::from(rank.label())
///     }
/// }
///
/// let rank = create_radio_button_field("ランク", &[Rank::A]);
/// let _ = rank.equals("C");
/// ```
///

pub trait ChoiceOption: Copy + Into<FieldValue> + 'static {
    fn label(self) -> &'static str;
}

impl ChoiceOption for &'static str {
    fn label(self) -> &'static str {
        self
    }
}

choice_field!(
    /// Dropdown field. The platform has no direct equality search on
    /// dropdowns, so only `in` / `not in` exist:
    ///
    /// ```compile_fail
    /// use kintone_query_core::field::{Equality, create_dropdown_field};
    ///
    /// let status = create_dropdown_field("ステータス", &["商談中", "受注"]);
    /// let _ = status.equals("受注");
    /// ```
    DropdownField,
    create_dropdown_field,
    FieldType::DropDown
);

choice_field!(
    /// Checkbox / multi-select field; `in` / `not in` only.
    ///
    /// ```compile_fail
    /// use kintone_query_core::field::{Equality, create_checkbox_field};
    ///
    /// let tags = create_checkbox_field("タグ", &["重要", "緊急"]);
    /// let _ = tags.not_equals("重要");
    /// ```
    CheckboxField,
    create_checkbox_field,
    FieldType::CheckBox
);

choice_field!(
    /// Radio button field. Unlike dropdowns, direct equality is supported.
    RadioButtonField,
    create_radio_button_field,
    FieldType::RadioButton
);

impl<O: ChoiceOption> Membership for DropdownField<O> {}

impl<O: ChoiceOption> Membership for CheckboxField<O> {}

impl<O: ChoiceOption> Equality for RadioButtonField<O> {}
impl<O: ChoiceOption> Membership for RadioButtonField<O> {}

// ----------------------------------------------------------------------
// Table sub-fields
// ----------------------------------------------------------------------

///
/// TableField
///
/// Column inside a subtable or a related-records display field, addressed
/// by its dotted path. The query language only allows `in` / `not in` on
/// such columns.
///
/// ```compile_fail
/// use kintone_query_core::field::{Comparison, create_table_field};
///
/// let price = create_table_field("明細.価格");
/// let _ = price.greater_than(100);
/// ```
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TableField {
    code: &'static str,
}

impl Field for TableField {
    type Value = FieldValue;

    fn code(&self) -> &'static str {
        self.code
    }
}

impl Membership for TableField {}

#[must_use]
pub const fn create_table_field(code: &'static str) -> TableField {
    TableField { code }
}
