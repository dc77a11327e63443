//! Resolve maintainer contacts for free-form package references.
//!
//! Given an arbitrary string such as a bug title, find the package atoms in
//! it, look them up in an on-disk package tree, and expand the declared
//! maintainers and herd memberships into a priority-ordered list of email
//! addresses. The first address is the suggested assignee, the rest are CCs.

pub mod atom;
mod contacts;
pub mod error;
pub mod herds;
mod metadata;
pub mod resolver;
pub mod tree;

use tracing::debug;

pub use atom::{extract_atoms, PackageAtom};
pub use contacts::ContactList;
pub use error::Error;
pub use herds::{Herd, HerdRegistry};
pub use resolver::Resolver;
pub use tree::PackageTree;

/// Resolve an arbitrary string to an ordered, duplicate-free list of contact
/// addresses.
///
/// Lookups are best-effort: atoms that match nothing in the tree and
/// directories whose metadata cannot be read are skipped, so the result may
/// be shorter than the input suggests, or empty. Nothing is ever raised from
/// here.
pub fn contacts_for(input: &str, tree: &PackageTree) -> Vec<String> {
    // A title's trailing colon ("app-misc/foo:") would otherwise be read as
    // a slot separator, so colons are dropped up front.
    let cleaned = input.replace(':', "");

    let mut resolver = Resolver::new(tree);
    let mut contacts = ContactList::new();
    for atom in extract_atoms(&cleaned) {
        for dir in tree.locate(&atom) {
            match resolver.resolve(&dir) {
                Ok(emails) => contacts.extend(emails),
                Err(err) => debug!(%dir, error = %err, "no contacts for directory"),
            }
        }
    }
    contacts.into_vec()
}
