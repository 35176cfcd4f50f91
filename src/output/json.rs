//! JSON output for subnet calculations.

use crate::models::{FormatError, SubnetInfo};
use serde::Serialize;

/// One input and its outcome, as written to JSON.
#[derive(Serialize, Debug)]
pub struct JsonRecord<'a> {
    pub input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<&'a SubnetInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Serialize a result as a single line of JSON.
pub fn json_line(
    input: &str,
    result: &Result<SubnetInfo, FormatError>,
) -> Result<String, serde_json::Error> {
    let record = match result {
        Ok(info) => JsonRecord {
            input: input.trim(),
            subnet: Some(info),
            error: None,
        },
        Err(e) => JsonRecord {
            input: input.trim(),
            subnet: None,
            error: Some(e.to_string()),
        },
    };
    serde_json::to_string(&record)
}
