use serde::Serialize;

use crate::model::attributes::Attributes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Success => write!(f, "success"),
            Status::Error => write!(f, "error"),
        }
    }
}

/// Diagnostics report for one SAML response.
///
/// `status` is `Error` exactly when `errors` is non-empty, and `warnings`
/// is empty whenever `status` is `Error`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub status: Status,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub available_attributes: Attributes,
    pub mapped_attributes: Attributes,
}

impl StatusReport {
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_stable_field_names() {
        let mut mapped = Attributes::new();
        mapped.insert("User login value", ["jdoe"]);
        let report = StatusReport {
            status: Status::Success,
            errors: vec![],
            warnings: vec![],
            available_attributes: Attributes::new(),
            mapped_attributes: mapped,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["status"], "success");
        assert!(value["errors"].as_array().unwrap().is_empty());
        assert!(value["warnings"].as_array().unwrap().is_empty());
        assert!(value["availableAttributes"].as_object().unwrap().is_empty());
        assert_eq!(value["mappedAttributes"]["User login value"][0], "jdoe");
    }

    #[test]
    fn error_status_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Status::Error).unwrap(), "error");
    }
}
