// Query fields for kintone app "sales".
// Generated by kintone-query. Do not edit by hand.
// 添付ファイル: FILE type is not supported
use kintone_query::field::{
    create_date_field, create_dropdown_field, create_number_field, create_string_field,
    create_table_field, create_user_field,
};
use kintone_query::QueryBuilder;

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ステータスOption {
    商談中,
    受注,
    失注,
}

impl ステータスOption {
    pub const ALL: &[Self] = &[Self::商談中, Self::受注, Self::失注,];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::商談中 => "商談中",
            Self::受注 => "受注",
            Self::失注 => "失注",
        }
    }
}

impl kintone_query::field::ChoiceOption for ステータスOption {
    fn label(self) -> &'static str {
        self.as_str()
    }
}

impl ::core::fmt::Display for ステータスOption {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ステータスOption> for kintone_query::expr::FieldValue {
    fn from(option: ステータスOption) -> Self {
        Self::from(option.as_str())
    }
}

impl From<ステータスOption> for String {
    fn from(option: ステータスOption) -> Self {
        option.as_str().to_string()
    }
}

#[allow(non_snake_case)]
#[derive(Clone, Copy, Debug)]
pub struct QueryFields {
    pub 会社名: kintone_query::field::StringField,
    pub ステータス: kintone_query::field::DropdownField<ステータスOption>,
    pub 契約日: kintone_query::field::DateField,
    pub 売上高: kintone_query::field::NumberField,
    pub 担当者: kintone_query::field::UserField,
    pub 明細__品名: kintone_query::field::TableField,
}

impl QueryFields {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            会社名: create_string_field("会社名"),
            ステータス: create_dropdown_field("ステータス", ステータスOption::ALL),
            契約日: create_date_field("契約日"),
            売上高: create_number_field("売上高"),
            担当者: create_user_field("担当者"),
            明細__品名: create_table_field("明細.品名"),
        }
    }
}

impl Default for QueryFields {
    fn default() -> Self {
        Self::new()
    }
}

pub const QUERY_FIELDS: QueryFields = QueryFields::new();

#[must_use]
pub fn create_query() -> QueryBuilder {
    QueryBuilder::new()
}
