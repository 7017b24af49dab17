/// Parsed representation of a SAML 2.0 `<samlp:Response>` document
#[derive(Debug, Default)]
pub struct SamlResponse {
    /// Local name of the document element
    pub root_element: Option<String>,
    pub destination: Option<String>,
    /// Issuer of the Response, falling back to the Assertion's Issuer
    pub issuer: Option<String>,
    pub status_code: Option<String>,
    pub status_message: Option<String>,
    pub assertion_count: usize,
    pub has_encrypted_assertion: bool,
    pub has_signature: bool,
    pub name_id: Option<String>,
    pub conditions: Option<Conditions>,
    pub audiences: Vec<String>,
    pub attributes: Vec<SamlAttribute>,
}

#[derive(Debug, Default)]
pub struct Conditions {
    pub not_before: Option<String>,
    pub not_on_or_after: Option<String>,
}

#[derive(Debug)]
pub struct SamlAttribute {
    /// The Name attribute (URN, OID or a friendly key)
    pub name: String,
    pub values: Vec<String>,
}
