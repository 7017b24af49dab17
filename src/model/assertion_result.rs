use super::attributes::Attributes;

/// Outcome of an Assertion Validator call.
///
/// Protocol-level failures (bad status, expired conditions, ...) live in
/// `errors` and `last_error_reason`; attributes are only populated when the
/// response was accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssertionResult {
    pub errors: Vec<String>,
    pub last_error_reason: Option<String>,
    pub attributes: Attributes,
}

impl AssertionResult {
    pub fn accepted(attributes: Attributes) -> Self {
        Self {
            errors: Vec::new(),
            last_error_reason: None,
            attributes,
        }
    }

    /// A response the validator processed but refused.
    pub fn rejected(code: &str, reason: impl Into<String>) -> Self {
        Self {
            errors: vec![code.to_string()],
            last_error_reason: Some(reason.into()),
            attributes: Attributes::new(),
        }
    }
}
