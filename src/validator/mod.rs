//! Assertion Validator boundary.
//!
//! A validator turns some SAML payload into an immutable [`AssertionResult`].
//! Responses the validator understood but refused are reported inside the
//! result; `Err` is reserved for failures of the call itself.

pub mod xml;

use thiserror::Error;

use crate::model::assertion_result::AssertionResult;

pub use xml::{ValidatorOptions, XmlResponseValidator};

/// Failure of the validation call itself.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// No payload was supplied.
    #[error("SAML response is empty")]
    EmptyInput,

    /// Payload is neither XML nor valid base64.
    #[error("SAML response could not be decoded: {0}")]
    Decode(String),

    /// Payload is not well-formed XML.
    #[error("SAML response is not well-formed XML: {0}")]
    MalformedXml(String),
}

pub trait AssertionValidator {
    /// Invocation failure; its message becomes the report's single error.
    type Error: std::fmt::Display;

    fn validate(&self) -> Result<AssertionResult, Self::Error>;
}
