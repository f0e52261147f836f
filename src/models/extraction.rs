//! Extraction backend payload
//!
//! Serde types for the JSON the extraction endpoint returns. The backend is
//! an opaque collaborator; we only mirror its response shape. Field names in
//! block summaries are exactly what the backend emits, serde-renamed here.

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// General-info keys that actually get rendered. Everything else in the
/// payload is parsed but not displayed.
pub const GENERAL_INFO_ALLOWED: [&str; 4] = ["RollNo", "EnrollmentNo", "Name", "Gender"];

/// Per-semester summary fields attached to a marksheet block.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BlockSummary {
    #[serde(rename = "Semester", default)]
    pub semester: String,
    #[serde(rename = "Even/Odd", default)]
    pub even_odd: String,
    #[serde(rename = "Total Marks Obt.", default)]
    pub total_marks: String,
    #[serde(rename = "Result Status", default)]
    pub result_status: String,
    #[serde(rename = "SGPA", default)]
    pub sgpa: String,
}

impl BlockSummary {
    /// Labeled, non-empty fields in display order.
    pub fn display_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("Semester", self.semester.as_str()),
            ("Even/Odd", self.even_odd.as_str()),
            ("Total Marks Obt.", self.total_marks.as_str()),
            ("SGPA", self.sgpa.as_str()),
            ("Result Status", self.result_status.as_str()),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .collect()
    }
}

/// One extracted marksheet table.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MarksheetBlock {
    #[serde(default)]
    pub header: Option<Vec<String>>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
    #[serde(default)]
    pub summary: Option<BlockSummary>,
}

/// Full response of the extraction endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ExtractionResponse {
    #[serde(default)]
    pub general_info: Vec<(String, String)>,
    #[serde(default)]
    pub marksheet_blocks: Vec<MarksheetBlock>,
    /// If present and truthy, the response is a failure regardless of the
    /// other fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl ExtractionResponse {
    pub fn from_json(text: &str) -> Result<Self, ViewerError> {
        Ok(serde_json::from_str(text)?)
    }

    /// JS truthiness of the `error` field.
    pub fn is_error(&self) -> bool {
        match &self.error {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::Bool(b)) => *b,
            Some(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(serde_json::Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }

    /// True when the response has nothing displayable: no blocks and no
    /// general-info pair that survives the allow-list. Such responses
    /// render the no-data placeholder.
    pub fn is_empty(&self) -> bool {
        self.display_pairs().is_empty() && self.marksheet_blocks.is_empty()
    }

    /// General-info pairs that pass the display allow-list, in payload order.
    pub fn display_pairs(&self) -> Vec<(&str, &str)> {
        self.general_info
            .iter()
            .filter(|(key, _)| GENERAL_INFO_ALLOWED.contains(&key.as_str()))
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect()
    }
}
