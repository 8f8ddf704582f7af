//! Response schema generation and payload checking.
//!
//! The report schema is derived from the [`ReportData`](crate::types::ReportData)
//! types once and cached; the same document is sent to the generation endpoint
//! as `responseSchema` and used to check payloads on the way back in. The
//! schema deliberately does not pin the dimensions count, matching the
//! request-side contract (the 4-dimension layout is instructed, not enforced).

use std::sync::OnceLock;

use jsonschema::{Draft, JSONSchema};
use schemars::gen::SchemaSettings;
use serde_json::Value;

use crate::{
    error::{CompassError, Result},
    types::ReportData,
};

const MAX_SCHEMA_ERRORS: usize = 3;

/// Draft-07 JSON schema for the full report, with subschemas inlined.
/// The generation endpoint rejects `$ref` indirection.
pub fn report_schema() -> &'static Value {
    static SCHEMA: OnceLock<Value> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        let settings = SchemaSettings::draft07().with(|s| {
            s.inline_subschemas = true;
        });
        let root = settings.into_generator().into_root_schema_for::<ReportData>();
        serde_json::to_value(root)
            .unwrap_or_else(|err| panic!("failed to serialize report schema: {}", err))
    })
}

/// Validate a raw payload against the report schema.
pub fn validate_report_payload(payload: &Value) -> Result<()> {
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(report_schema())
        .map_err(|err| {
            CompassError::Validation(format!(
                "failed to prepare report schema for validation: {}",
                err
            ))
        })?;

    if let Err(errors) = validator.validate(payload) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let mut path = error.instance_path.to_string();
                if path.is_empty() {
                    path = "<root>".to_string();
                }
                details.push(format!("{}: {}", path, error));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail_str = if details.is_empty() {
            "payload failed report schema validation".to_string()
        } else {
            details.join("; ")
        };

        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(CompassError::Validation(format!(
            "response does not match report schema: {}",
            detail_str
        )));
    }

    Ok(())
}

/// Parse a response body into a typed report. Failures carry the JSON path
/// that broke.
pub fn parse_report(text: &str) -> Result<ReportData> {
    let payload: Value = serde_json::from_str(text)?;
    validate_report_payload(&payload)?;

    let raw = payload.to_string();
    let mut deserializer = serde_json::Deserializer::from_str(&raw);
    let report = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() {
            "<root>".to_string()
        } else {
            path
        };
        CompassError::Validation(format!(
            "failed to deserialize report at {}: {}",
            location, err
        ))
    })?;

    Ok(report)
}
