use anyhow::Result;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::model::saml_response::*;

/// Elements whose text content is captured.
const TEXT_ELEMENTS: &[&str] = &["Issuer", "StatusMessage", "NameID", "Audience", "AttributeValue"];

pub fn parse_str(xml: &str) -> Result<SamlResponse> {
    let mut reader = Reader::from_str(xml);
    let mut response = SamlResponse::default();
    let mut element_stack: Vec<String> = Vec::new();
    // Open text buffer and the stack depth of the element that owns it
    let mut text: Option<(usize, String)> = None;

    loop {
        match reader.read_event() {
            Err(e) => anyhow::bail!("XML parse error at position {}: {}", reader.error_position(), e),
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) => {
                let name = local_name(&e);
                process_element(&name, &e, &element_stack, &mut response);
                if text.is_none() && TEXT_ELEMENTS.contains(&name.as_str()) {
                    text = Some((element_stack.len(), String::new()));
                }
                element_stack.push(name);
            }
            Ok(Event::Empty(e)) => {
                let name = local_name(&e);
                process_element(&name, &e, &element_stack, &mut response);
            }
            Ok(Event::Text(e)) => {
                if let Some((_, ref mut buf)) = text {
                    buf.push_str(&e.unescape()?);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some((_, ref mut buf)) = text {
                    buf.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                if let Some(name) = element_stack.pop() {
                    if text.as_ref().is_some_and(|(depth, _)| *depth == element_stack.len()) {
                        if let Some((_, buf)) = text.take() {
                            finish_text(&name, buf.trim(), &element_stack, &mut response);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    if response.root_element.is_none() {
        anyhow::bail!("XML document has no root element");
    }

    Ok(response)
}

fn local_name(e: &BytesStart<'_>) -> String {
    let full = String::from_utf8_lossy(e.name().as_ref()).to_string();
    full.rsplit(':').next().unwrap_or(&full).to_string()
}

fn get_attr(e: &BytesStart<'_>, name: &str) -> Option<String> {
    e.attributes().filter_map(|a| a.ok()).find_map(|a| {
        let key = String::from_utf8_lossy(a.key.as_ref()).to_string();
        let local_key = key.rsplit(':').next().unwrap_or(&key);
        if local_key == name {
            let value = a
                .unescape_value()
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| String::from_utf8_lossy(&a.value).to_string());
            Some(value)
        } else {
            None
        }
    })
}

fn parent_is(stack: &[String], parent: &str) -> bool {
    stack.last().is_some_and(|p| p == parent)
}

fn process_element(name: &str, e: &BytesStart<'_>, stack: &[String], response: &mut SamlResponse) {
    if response.root_element.is_none() {
        response.root_element = Some(name.to_string());
        if name == "Response" {
            response.destination = get_attr(e, "Destination");
        }
    }

    match name {
        "StatusCode" => {
            // Nested StatusCode elements carry second-level codes only.
            if parent_is(stack, "Status") && response.status_code.is_none() {
                response.status_code = get_attr(e, "Value");
            }
        }
        "Assertion" => response.assertion_count += 1,
        "EncryptedAssertion" => response.has_encrypted_assertion = true,
        "Signature" => response.has_signature = true,
        "Conditions" => {
            response.conditions = Some(Conditions {
                not_before: get_attr(e, "NotBefore"),
                not_on_or_after: get_attr(e, "NotOnOrAfter"),
            });
        }
        "Attribute" => {
            if parent_is(stack, "AttributeStatement") {
                if let Some(attr_name) = get_attr(e, "Name") {
                    response.attributes.push(SamlAttribute {
                        name: attr_name,
                        values: Vec::new(),
                    });
                }
            }
        }
        _ => {}
    }
}

fn finish_text(name: &str, value: &str, stack: &[String], response: &mut SamlResponse) {
    match name {
        "Issuer" => {
            if parent_is(stack, "Response") {
                response.issuer = Some(value.to_string());
            } else if parent_is(stack, "Assertion") && response.issuer.is_none() {
                response.issuer = Some(value.to_string());
            }
        }
        "StatusMessage" => {
            if parent_is(stack, "Status") && !value.is_empty() {
                response.status_message = Some(value.to_string());
            }
        }
        "NameID" => {
            if parent_is(stack, "Subject") {
                response.name_id = Some(value.to_string());
            }
        }
        "Audience" => {
            if !value.is_empty() {
                response.audiences.push(value.to_string());
            }
        }
        "AttributeValue" => {
            if parent_is(stack, "Attribute") && !value.is_empty() {
                if let Some(attr) = response.attributes.last_mut() {
                    attr.values.push(value.to_string());
                }
            }
        }
        _ => {}
    }
}
