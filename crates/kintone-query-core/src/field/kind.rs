use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// FieldType
///
/// kintone form field type tags, as they appear in the form schema.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldType {
    SingleLineText,
    MultiLineText,
    RichText,
    Link,
    Number,
    Calc,
    RecordNumber,
    DropDown,
    CheckBox,
    RadioButton,
    MultiSelect,
    Date,
    Time,
    Datetime,
    CreatedTime,
    UpdatedTime,
    UserSelect,
    OrganizationSelect,
    GroupSelect,
    Creator,
    Modifier,
    Status,
    StatusAssignee,
    Category,
    File,
    Subtable,
    ReferenceTable,
    Label,
    Spacer,
    Hr,
    Group,
}

impl FieldType {
    pub const ALL: [Self; 31] = [
        Self::SingleLineText,
        Self::MultiLineText,
        Self::RichText,
        Self::Link,
        Self::Number,
        Self::Calc,
        Self::RecordNumber,
        Self::DropDown,
        Self::CheckBox,
        Self::RadioButton,
        Self::MultiSelect,
        Self::Date,
        Self::Time,
        Self::Datetime,
        Self::CreatedTime,
        Self::UpdatedTime,
        Self::UserSelect,
        Self::OrganizationSelect,
        Self::GroupSelect,
        Self::Creator,
        Self::Modifier,
        Self::Status,
        Self::StatusAssignee,
        Self::Category,
        Self::File,
        Self::Subtable,
        Self::ReferenceTable,
        Self::Label,
        Self::Spacer,
        Self::Hr,
        Self::Group,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleLineText => "SINGLE_LINE_TEXT",
            Self::MultiLineText => "MULTI_LINE_TEXT",
            Self::RichText => "RICH_TEXT",
            Self::Link => "LINK",
            Self::Number => "NUMBER",
            Self::Calc => "CALC",
            Self::RecordNumber => "RECORD_NUMBER",
            Self::DropDown => "DROP_DOWN",
            Self::CheckBox => "CHECK_BOX",
            Self::RadioButton => "RADIO_BUTTON",
            Self::MultiSelect => "MULTI_SELECT",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Datetime => "DATETIME",
            Self::CreatedTime => "CREATED_TIME",
            Self::UpdatedTime => "UPDATED_TIME",
            Self::UserSelect => "USER_SELECT",
            Self::OrganizationSelect => "ORGANIZATION_SELECT",
            Self::GroupSelect => "GROUP_SELECT",
            Self::Creator => "CREATOR",
            Self::Modifier => "MODIFIER",
            Self::Status => "STATUS",
            Self::StatusAssignee => "STATUS_ASSIGNEE",
            Self::Category => "CATEGORY",
            Self::File => "FILE",
            Self::Subtable => "SUBTABLE",
            Self::ReferenceTable => "REFERENCE_TABLE",
            Self::Label => "LABEL",
            Self::Spacer => "SPACER",
            Self::Hr => "HR",
            Self::Group => "GROUP",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// UnknownFieldType
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown field type '{0}'")]
pub struct UnknownFieldType(pub String);

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| UnknownFieldType(s.to_string()))
    }
}
