pub mod saml_response;
