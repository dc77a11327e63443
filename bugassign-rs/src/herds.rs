use std::{fs, path::Path};

use crate::error::ParseError;

/// A named maintainer group from the tree-wide registry, with its optional
/// shared contact address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Herd {
    pub name: String,
    pub email: Option<String>,
}

/// The tree-wide herd registry (`metadata/herds.xml`).
///
/// The registry is small and consulted once per herd membership element, so
/// a linear scan over the records is all the lookup structure needed.
#[derive(Debug, Clone, Default)]
pub struct HerdRegistry {
    herds: Vec<Herd>,
}

impl HerdRegistry {
    pub fn load(path: &Path) -> Result<Self, ParseError> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source)
    }

    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let doc = roxmltree::Document::parse(source)?;
        let herds = doc
            .root_element()
            .children()
            .filter(|node| node.has_tag_name("herd"))
            .map(|herd| Herd {
                name: child_text(herd, "name").unwrap_or_default(),
                email: child_text(herd, "email"),
            })
            .collect();
        Ok(Self { herds })
    }

    /// Contact address for a herd, if the herd is registered and has one.
    pub fn email_for(&self, name: &str) -> Option<&str> {
        self.herds
            .iter()
            .find(|herd| herd.name == name)
            .and_then(|herd| herd.email.as_deref())
    }
}

/// Text of the first child element with the given tag. Empty elements count
/// as absent.
pub(crate) fn child_text(node: roxmltree::Node<'_, '_>, tag: &str) -> Option<String> {
    node.children()
        .find(|child| child.has_tag_name(tag))
        .and_then(|child| child.text())
        .map(str::to_string)
}
