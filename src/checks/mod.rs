pub mod mapping;

use tracing::{debug, warn};

use crate::model::assertion_result::AssertionResult;
use crate::model::attribute_mapping::AttributeMapping;
use crate::result::{Status, StatusReport};
use crate::validator::AssertionValidator;

/// Run `validator` and evaluate its outcome against `mapping`.
///
/// A failing validator call becomes a single error entry; this never fails.
pub fn run<V: AssertionValidator>(validator: &V, mapping: &AttributeMapping) -> StatusReport {
    let result = match validator.validate() {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "SAML validation call failed");
            AssertionResult {
                errors: vec![e.to_string()],
                ..AssertionResult::default()
            }
        }
    };
    evaluate(&result, mapping)
}

/// Build the status report for an already-obtained validator result.
pub fn evaluate(result: &AssertionResult, mapping: &AttributeMapping) -> StatusReport {
    let mut errors: Vec<String> = result
        .errors
        .iter()
        .filter(|e| !e.is_empty())
        .cloned()
        .collect();
    if let Some(reason) = result.last_error_reason.as_ref().filter(|r| !r.is_empty()) {
        errors.push(reason.clone());
    }

    let status = if errors.is_empty() {
        Status::Success
    } else {
        Status::Error
    };

    let warnings = match status {
        Status::Success => mapping::missing_mapping_warnings(&result.attributes, mapping),
        Status::Error => Vec::new(),
    };

    debug!(
        status = %status,
        errors = errors.len(),
        warnings = warnings.len(),
        "SAML response evaluated"
    );

    StatusReport {
        status,
        errors,
        warnings,
        available_attributes: result.attributes.clone(),
        mapped_attributes: mapping::resolve(&result.attributes, mapping),
    }
}
