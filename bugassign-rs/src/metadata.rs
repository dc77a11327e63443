use std::{fs, path::Path};

use crate::error::ParseError;
use crate::herds::{child_text, HerdRegistry};

/// Accumulate contact addresses from a package `metadata.xml`.
///
/// The document is walked in document order. A herd membership element
/// contributes the herd's registered address, if any. A maintainer element
/// contributes its own email, unless it opts out of automatic assignment for
/// a declared role — in which case an earlier occurrence of that address is
/// removed instead. The result may contain duplicates; ordering and
/// deduplication across directories belong to the aggregation layer.
pub fn contacts_in(path: &Path, herds: &HerdRegistry) -> Result<Vec<String>, ParseError> {
    let source = fs::read_to_string(path)?;
    parse_contacts(&source, herds)
}

pub fn parse_contacts(source: &str, herds: &HerdRegistry) -> Result<Vec<String>, ParseError> {
    let doc = roxmltree::Document::parse(source)?;
    let mut contacts: Vec<String> = Vec::new();

    for node in doc.descendants() {
        if node.has_tag_name("herd") {
            let name = node.text().unwrap_or("");
            if let Some(email) = herds.email_for(name) {
                contacts.push(email.to_string());
            }
        } else if node.has_tag_name("maintainer") {
            let Some(email) = child_text(node, "email") else {
                continue;
            };
            let opted_out = node.attribute("ignoreauto") == Some("1")
                && node.attribute("role").map_or(false, |role| !role.is_empty());
            if opted_out {
                // Only an earlier occurrence is suppressed; an opt-out never
                // affects addresses appended after it.
                if let Some(pos) = contacts.iter().position(|c| c == &email) {
                    contacts.remove(pos);
                }
            } else {
                contacts.push(email);
            }
        }
    }

    Ok(contacts)
}
