pub mod assertion_result;
pub mod attribute_mapping;
pub mod attributes;
pub mod saml_response;
