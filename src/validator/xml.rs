use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use super::{AssertionValidator, ValidatorError};
use crate::model::assertion_result::AssertionResult;
use crate::model::attributes::Attributes;
use crate::model::saml_response::SamlResponse;
use crate::parsers::saml_response;

const STATUS_SUCCESS: &str = "urn:oasis:names:tc:SAML:2.0:status:Success";
const INVALID_RESPONSE: &str = "invalid_response";

pub const DEFAULT_CLOCK_SKEW_SECS: u32 = 180;

/// Expectations the response is checked against.
#[derive(Debug, Clone)]
pub struct ValidatorOptions {
    /// Expected Audience (the SP entity ID)
    pub sp_entity_id: Option<String>,
    /// Expected Destination (the SP assertion consumer URL)
    pub acs_url: Option<String>,
    pub idp_entity_id: Option<String>,
    pub clock_skew_secs: u32,
    pub require_signature: bool,
    /// Reference time for Conditions; the wall clock when unset
    pub now: Option<DateTime<Utc>>,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            sp_entity_id: None,
            acs_url: None,
            idp_entity_id: None,
            clock_skew_secs: DEFAULT_CLOCK_SKEW_SECS,
            require_signature: false,
            now: None,
        }
    }
}

/// Structural validator for a SAML 2.0 Response.
///
/// Checks status, assertion shape, destination, issuer, audience and
/// validity window. Signatures are only checked for presence, never
/// verified.
pub struct XmlResponseValidator {
    /// Raw bytes as read; decoding is part of validation
    payload: Vec<u8>,
    options: ValidatorOptions,
}

impl XmlResponseValidator {
    pub fn new(payload: impl Into<Vec<u8>>, options: ValidatorOptions) -> Self {
        Self {
            payload: payload.into(),
            options,
        }
    }
}

impl AssertionValidator for XmlResponseValidator {
    type Error = ValidatorError;

    fn validate(&self) -> Result<AssertionResult, ValidatorError> {
        let xml = decode_payload(&self.payload)?;
        let response = saml_response::parse_str(&xml)
            .map_err(|e| ValidatorError::MalformedXml(e.to_string()))?;

        match check_response(&response, &self.options) {
            Ok(()) => {
                let mut attributes = Attributes::new();
                for attr in &response.attributes {
                    attributes.insert(&attr.name, attr.values.iter().cloned());
                }
                debug!(
                    name_id = response.name_id.as_deref().unwrap_or(""),
                    attributes = attributes.len(),
                    "SAML response accepted"
                );
                Ok(AssertionResult::accepted(attributes))
            }
            Err(reason) => {
                debug!(reason = %reason, "SAML response rejected");
                Ok(AssertionResult::rejected(INVALID_RESPONSE, reason))
            }
        }
    }
}

/// Accept either raw XML or a base64-encoded document (as posted to the ACS).
pub fn decode_payload(payload: &[u8]) -> Result<String, ValidatorError> {
    let text = std::str::from_utf8(payload)
        .map_err(|_| ValidatorError::Decode("payload is not valid UTF-8".to_string()))?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidatorError::EmptyInput);
    }
    if trimmed.starts_with('<') {
        return Ok(trimmed.to_string());
    }

    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = BASE64
        .decode(compact.as_bytes())
        .map_err(|e| ValidatorError::Decode(format!("invalid base64: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|_| ValidatorError::Decode("decoded payload is not valid UTF-8".to_string()))
}

fn check_response(response: &SamlResponse, options: &ValidatorOptions) -> Result<(), String> {
    if response.root_element.as_deref() != Some("Response") {
        return Err("SAML Response must contain 1 Response element".to_string());
    }

    let status = response.status_code.as_deref().unwrap_or("");
    if status != STATUS_SUCCESS {
        let mut reason = format!("The status code of the Response was not Success, was {}", status);
        if let Some(ref message) = response.status_message {
            reason.push_str(&format!(" -> {}", message));
        }
        return Err(reason);
    }

    if response.has_encrypted_assertion {
        return Err("Encrypted assertions are not supported".to_string());
    }
    if response.assertion_count != 1 {
        return Err("SAML Response must contain 1 Assertion".to_string());
    }

    if options.require_signature && !response.has_signature {
        return Err("The Assertion of the Response is not signed and the SP requires it".to_string());
    }

    if let (Some(expected), Some(actual)) = (&options.acs_url, &response.destination) {
        if expected != actual {
            return Err(format!(
                "The response was received at {} instead of {}",
                expected, actual
            ));
        }
    }

    if let Some(ref expected) = options.idp_entity_id {
        let actual = response.issuer.as_deref().unwrap_or("");
        if expected != actual {
            return Err(format!(
                "Invalid issuer in the Assertion/Response (expected '{}', received '{}')",
                expected, actual
            ));
        }
    }

    if let Some(ref expected) = options.sp_entity_id {
        if !response.audiences.is_empty() && !response.audiences.contains(expected) {
            return Err(format!("{} is not a valid audience for this Response", expected));
        }
    }

    if let Some(ref conditions) = response.conditions {
        let now = options.now.unwrap_or_else(Utc::now);
        let skew = Duration::seconds(i64::from(options.clock_skew_secs));

        if let Some(ref not_before) = conditions.not_before {
            let earliest = parse_instant(not_before)?
                .checked_sub_signed(skew)
                .ok_or_else(|| out_of_range(not_before, options.clock_skew_secs))?;
            if earliest > now {
                return Err("Could not validate timestamp: not yet valid. Check system clock.".to_string());
            }
        }
        if let Some(ref not_on_or_after) = conditions.not_on_or_after {
            let latest = parse_instant(not_on_or_after)?
                .checked_add_signed(skew)
                .ok_or_else(|| out_of_range(not_on_or_after, options.clock_skew_secs))?;
            if latest <= now {
                return Err("Could not validate timestamp: expired. Check system clock.".to_string());
            }
        }
    }

    Ok(())
}

fn out_of_range(value: &str, skew_secs: u32) -> String {
    format!(
        "Could not validate timestamp: {} is out of range with a clock skew of {}s",
        value, skew_secs
    )
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| format!("Invalid timestamp {}", value))
}
