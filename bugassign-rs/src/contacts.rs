use std::collections::HashSet;

/// An insertion-ordered, duplicate-free accumulator for contact addresses.
///
/// The first occurrence of an address wins both presence and position, so an
/// address contributed by an earlier (higher-priority) directory keeps its
/// earlier slot no matter how often it reappears.
#[derive(Debug, Default)]
pub struct ContactList {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl ContactList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, email: String) {
        if self.seen.insert(email.clone()) {
            self.ordered.push(email);
        }
    }

    pub fn extend(&mut self, emails: impl IntoIterator<Item = String>) {
        for email in emails {
            self.push(email);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}
