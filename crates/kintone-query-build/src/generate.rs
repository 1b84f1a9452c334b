use crate::{
    GenerateError, GenerateOptions,
    descriptor::{FieldProperty, FormFields},
    ident::{IdentSet, field_ident, pascal_ident},
};
use kintone_query_core::field::FieldType;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use std::collections::BTreeSet;
use syn::{Ident, Path, parse_str};
use tracing::debug;

///
/// Wrapper
///
/// Typed field wrapper a descriptor maps onto.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Wrapper {
    String,
    Number,
    Dropdown,
    Checkbox,
    RadioButton,
    Date,
    DateTime,
    Time,
    User,
    Org,
    Group,
    Table,
}

impl Wrapper {
    /// Wrapper for a top-level field, or `None` when the type cannot be
    /// queried directly.
    pub(crate) const fn for_field_type(ty: FieldType) -> Option<Self> {
        match ty {
            FieldType::SingleLineText
            | FieldType::MultiLineText
            | FieldType::RichText
            | FieldType::Link
            | FieldType::Status => Some(Self::String),
            FieldType::Number | FieldType::Calc | FieldType::RecordNumber => Some(Self::Number),
            FieldType::DropDown => Some(Self::Dropdown),
            FieldType::CheckBox | FieldType::MultiSelect => Some(Self::Checkbox),
            FieldType::RadioButton => Some(Self::RadioButton),
            FieldType::Date => Some(Self::Date),
            FieldType::Datetime | FieldType::CreatedTime | FieldType::UpdatedTime => {
                Some(Self::DateTime)
            }
            FieldType::Time => Some(Self::Time),
            FieldType::UserSelect
            | FieldType::Creator
            | FieldType::Modifier
            | FieldType::StatusAssignee => Some(Self::User),
            FieldType::OrganizationSelect => Some(Self::Org),
            FieldType::GroupSelect => Some(Self::Group),
            FieldType::Category
            | FieldType::File
            | FieldType::Subtable
            | FieldType::ReferenceTable
            | FieldType::Label
            | FieldType::Spacer
            | FieldType::Hr
            | FieldType::Group => None,
        }
    }

    pub(crate) const fn factory(self) -> &'static str {
        match self {
            Self::String => "create_string_field",
            Self::Number => "create_number_field",
            Self::Dropdown => "create_dropdown_field",
            Self::Checkbox => "create_checkbox_field",
            Self::RadioButton => "create_radio_button_field",
            Self::Date => "create_date_field",
            Self::DateTime => "create_date_time_field",
            Self::Time => "create_time_field",
            Self::User => "create_user_field",
            Self::Org => "create_org_field",
            Self::Group => "create_group_field",
            Self::Table => "create_table_field",
        }
    }

    pub(crate) const fn type_name(self) -> &'static str {
        match self {
            Self::String => "StringField",
            Self::Number => "NumberField",
            Self::Dropdown => "DropdownField",
            Self::Checkbox => "CheckboxField",
            Self::RadioButton => "RadioButtonField",
            Self::Date => "DateField",
            Self::DateTime => "DateTimeField",
            Self::Time => "TimeField",
            Self::User => "UserField",
            Self::Org => "OrgField",
            Self::Group => "GroupField",
            Self::Table => "TableField",
        }
    }

    const fn takes_options(self) -> bool {
        matches!(self, Self::Dropdown | Self::Checkbox | Self::RadioButton)
    }
}

///
/// Entry
///
/// One line of output, in form order.
///

enum Entry {
    Field {
        ident: Ident,
        path: String,
        wrapper: Wrapper,
        choices: Option<Choices>,
    },
    Unsupported {
        path: String,
        field_type: String,
    },
}

///
/// Choices
///
/// Option enum emitted for a dropdown, checkbox or radio button field.
///

struct Choices {
    ty: Ident,
    variants: Vec<Ident>,
    labels: Vec<String>,
}

impl Choices {
    fn new(ty: Ident, labels: Vec<String>) -> Self {
        // `ALL` is an associated const on the enum
        let mut taken = IdentSet::reserving(["ALL"]);
        let variants = labels
            .iter()
            .map(|label| taken.claim(pascal_ident(label)))
            .collect();

        Self {
            ty,
            variants,
            labels,
        }
    }

    fn tokens(&self, crate_path: &Path) -> TokenStream {
        let Self {
            ty,
            variants,
            labels,
        } = self;

        quote! {
            #[allow(non_camel_case_types)]
            #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
            pub enum #ty {
                #( #variants, )*
            }

            impl #ty {
                pub const ALL: &[Self] = &[ #( Self::#variants, )* ];

                #[must_use]
                pub const fn as_str(self) -> &'static str {
                    match self {
                        #( Self::#variants => #labels, )*
                    }
                }
            }

            impl #crate_path::field::ChoiceOption for #ty {
                fn label(self) -> &'static str {
                    self.as_str()
                }
            }

            impl ::core::fmt::Display for #ty {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl From<#ty> for #crate_path::expr::FieldValue {
                fn from(option: #ty) -> Self {
                    Self::from(option.as_str())
                }
            }

            impl From<#ty> for String {
                fn from(option: #ty) -> Self {
                    option.as_str().to_string()
                }
            }
        }
    }
}

///
/// Generator
///

pub(crate) struct Generator<'a> {
    options: &'a GenerateOptions,
    entries: Vec<Entry>,
    fields: IdentSet,
    // the generated struct and the imported builder live in the same namespace
    types: IdentSet,
}

impl<'a> Generator<'a> {
    pub(crate) fn new(options: &'a GenerateOptions) -> Self {
        Self {
            options,
            entries: Vec::new(),
            fields: IdentSet::default(),
            types: IdentSet::reserving(["QueryFields", "QueryBuilder"]),
        }
    }

    pub(crate) fn generate(
        mut self,
        fields: &FormFields,
        app_name: &str,
    ) -> Result<String, GenerateError> {
        let crate_path = parse_str::<Path>(&self.options.crate_path).map_err(|_| {
            GenerateError::InvalidCratePath {
                path: self.options.crate_path.clone(),
            }
        })?;

        for (code, prop) in &fields.properties {
            self.visit(code, prop);
        }

        let mut out = String::new();
        out.push_str(&format!("// Query fields for kintone app {app_name:?}.\n"));
        out.push_str("// Generated by kintone-query. Do not edit by hand.\n");
        for entry in &self.entries {
            if let Entry::Unsupported { path, field_type } = entry {
                out.push_str(&format!(
                    "// {}: {} type is not supported\n",
                    path.escape_debug(),
                    field_type.escape_debug()
                ));
            }
        }
        out.push_str(&self.tokens(&crate_path).to_string());
        out.push('\n');

        Ok(out)
    }

    fn visit(&mut self, code: &str, prop: &FieldProperty) {
        let Ok(ty) = prop.field_type.parse::<FieldType>() else {
            self.unsupported(code, &prop.field_type);
            return;
        };

        match ty {
            FieldType::Subtable if self.options.include_subtable => {
                for (child_code, child) in &prop.fields {
                    let path = format!("{code}.{child_code}");
                    let queryable = child
                        .field_type
                        .parse::<FieldType>()
                        .ok()
                        .and_then(Wrapper::for_field_type)
                        .is_some();

                    if queryable {
                        self.push(path, Wrapper::Table, None);
                    } else {
                        self.unsupported(&path, &child.field_type);
                    }
                }
            }
            FieldType::ReferenceTable if self.options.include_related => {
                let display = prop
                    .reference_table
                    .as_ref()
                    .map(|table| table.display_fields.as_slice())
                    .unwrap_or_default();

                for display_field in display {
                    self.push(format!("{code}.{display_field}"), Wrapper::Table, None);
                }
            }
            _ => match Wrapper::for_field_type(ty) {
                Some(wrapper) => {
                    let labels = wrapper
                        .takes_options()
                        .then(|| prop.options.values().map(|opt| opt.label.clone()).collect());
                    self.push(code.to_string(), wrapper, labels);
                }
                None => self.unsupported(code, &prop.field_type),
            },
        }
    }

    fn push(&mut self, path: String, wrapper: Wrapper, labels: Option<Vec<String>>) {
        let ident = self.fields.claim(field_ident(&path));
        let choices = labels.map(|labels| {
            let ty = self.types.claim(pascal_ident(&format!("{ident} option")));
            Choices::new(ty, labels)
        });

        self.entries.push(Entry::Field {
            ident,
            path,
            wrapper,
            choices,
        });
    }

    fn unsupported(&mut self, path: &str, field_type: &str) {
        debug!(field = %path, field_type = %field_type, "skipping unsupported field");

        self.entries.push(Entry::Unsupported {
            path: path.to_string(),
            field_type: field_type.to_string(),
        });
    }

    fn tokens(&self, crate_path: &Path) -> TokenStream {
        let mut factories = BTreeSet::new();
        let mut enums = Vec::new();
        let mut idents = Vec::new();
        let mut types = Vec::new();
        let mut inits = Vec::new();

        for entry in &self.entries {
            let Entry::Field {
                ident,
                path,
                wrapper,
                choices,
            } = entry
            else {
                continue;
            };

            factories.insert(wrapper.factory());

            let ty = format_ident!("{}", wrapper.type_name());
            let factory = format_ident!("{}", wrapper.factory());

            idents.push(ident);
            if let Some(choices) = choices {
                let option = &choices.ty;
                enums.push(choices.tokens(crate_path));
                types.push(quote!(#crate_path::field::#ty<#option>));
                inits.push(quote!(#factory(#path, #option::ALL)));
            } else {
                types.push(quote!(#crate_path::field::#ty));
                inits.push(quote!(#factory(#path)));
            }
        }

        debug!(fields = idents.len(), option_enums = enums.len(), "query fields generated");

        let imports = if factories.is_empty() {
            quote!()
        } else {
            let factories = factories.iter().map(|name| format_ident!("{}", name));
            quote! {
                use #crate_path::field::{ #(#factories),* };
            }
        };

        quote! {
            #imports
            use #crate_path::QueryBuilder;

            #(#enums)*

            #[allow(non_snake_case)]
            #[derive(Clone, Copy, Debug)]
            pub struct QueryFields {
                #( pub #idents: #types, )*
            }

            impl QueryFields {
                #[must_use]
                pub const fn new() -> Self {
                    Self {
                        #( #idents: #inits, )*
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
        }
    }
}
