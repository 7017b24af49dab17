use crate::model::attribute_mapping::{AttributeMapping, Role};
use crate::model::attributes::Attributes;

/// Resolve every configured role against the response attributes.
///
/// Configured roles always get an entry, empty when the attribute is
/// missing. Unset roles get none.
pub fn resolve(attributes: &Attributes, mapping: &AttributeMapping) -> Attributes {
    let mut mapped = Attributes::new();
    for role in Role::MAPPED_ORDER {
        if let Some(key) = mapping.key_for(role) {
            let values = attributes.get(key).unwrap_or_default();
            mapped.insert(role.label(), values.iter().cloned());
        }
    }
    mapped
}

/// One warning per configured role whose attribute is absent or has no values.
///
/// Roles mapped to an empty key are skipped without a warning.
pub fn missing_mapping_warnings(attributes: &Attributes, mapping: &AttributeMapping) -> Vec<String> {
    Role::WARNING_ORDER
        .iter()
        .filter_map(|&role| {
            let key = mapping.key_for(role)?;
            let found = attributes.get(key).is_some_and(|values| !values.is_empty());
            (!found).then(|| {
                format!(
                    "Mapping not found for the property {}, the field {} is not available in the SAML response.",
                    role.property(),
                    key
                )
            })
        })
        .collect()
}
