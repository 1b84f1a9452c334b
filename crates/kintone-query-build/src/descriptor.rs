//! Form field descriptors, shaped like the kintone `form/fields.json`
//! response. Maps keep document order so generated output follows the
//! form layout.

use crate::GenerateError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

///
/// FormFields
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FormFields {
    pub properties: IndexMap<String, FieldProperty>,
}

impl FormFields {
    /// Parse either a full `{"properties": {...}}` response or a bare
    /// properties map.
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        let envelope: Envelope = serde_json::from_str(json)?;

        Ok(match envelope {
            Envelope::Wrapped { properties } => Self { properties },
            Envelope::Bare(properties) => Self { properties },
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope {
    Wrapped {
        properties: IndexMap<String, FieldProperty>,
    },
    Bare(IndexMap<String, FieldProperty>),
}

///
/// FieldProperty
///
/// One form field. `fields` is only populated for subtables and
/// `reference_table` only for related-records fields.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FieldProperty {
    #[serde(rename = "type")]
    pub field_type: String,

    #[serde(default)]
    pub code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, FieldOption>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub fields: IndexMap<String, FieldProperty>,

    #[serde(
        default,
        rename = "referenceTable",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference_table: Option<ReferenceTable>,
}

///
/// FieldOption
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FieldOption {
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
}

///
/// ReferenceTable
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ReferenceTable {
    #[serde(default, rename = "displayFields")]
    pub display_fields: Vec<String>,
}
