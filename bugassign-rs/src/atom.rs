use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// A package reference recovered from free-form text: an optional category
/// plus a package name, with version qualifiers already stripped.
///
/// Extraction is deliberately permissive — any word-shaped token becomes an
/// atom. Ordinary words in a bug title simply fail the later directory
/// existence check, so there is no need to guess here which tokens are real
/// packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageAtom {
    pub category: Option<String>,
    pub name: String,
}

impl fmt::Display for PackageAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.category {
            Some(category) => write!(f, "{}/{}", category, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

// A candidate token: whitespace-bounded, optionally prefixed with version
// comparison operators and a `category/` part. Group 1 drops the boundary
// and the operators.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:^|\s)[<>~=]*((?:[A-Za-z0-9+_][A-Za-z0-9+_.-]*/)?[A-Za-z0-9+_][A-Za-z0-9+_.:@-]*)",
    )
    .unwrap()
});

// Trailing qualifiers to strip, anchored to the end of the token: a version
// (`-1.2.3b`), pre-release suffixes (`_alpha1`, `_rc3`, ...), a revision
// (`-r5`), a bracketed use-dependency clause, and a `:`-prefixed slot.
static SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"-[0-9.]+[a-z]?(?:_(?:alpha|beta|pre|rc|p)[0-9]*)*(?:-r[0-9]*)?(?:\[[!=?A-Za-z0-9+_@-]+\])?(?::[A-Za-z0-9+_.-]*)?$",
    )
    .unwrap()
});

/// Scan arbitrary text for package-shaped tokens and normalize each into a
/// [`PackageAtom`], in first-seen order. No deduplication is performed.
///
/// Callers passing whole bug titles should remove `:` characters from the
/// input first, so that a title's trailing colon is not misread as a slot
/// separator.
pub fn extract_atoms(input: &str) -> Vec<PackageAtom> {
    TOKEN_RE
        .captures_iter(input)
        .map(|caps| {
            let stripped = SUFFIX_RE.replace(&caps[1], "");
            match stripped.split_once('/') {
                Some((category, name)) => PackageAtom {
                    category: Some(category.to_string()),
                    name: name.to_string(),
                },
                None => PackageAtom {
                    category: None,
                    name: stripped.into_owned(),
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qualified(category: &str, name: &str) -> PackageAtom {
        PackageAtom {
            category: Some(category.to_string()),
            name: name.to_string(),
        }
    }

    fn bare(name: &str) -> PackageAtom {
        PackageAtom {
            category: None,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_extract_atoms() {
        let examples = vec![
            ("", vec![]),
            ("sys-apps/portage", vec![qualified("sys-apps", "portage")]),
            ("bash", vec![bare("bash")]),
            // Version, pre-release, revision and slot suffixes all strip to
            // the same atom.
            ("foo/bar-1.2.3_pre4-r5:0", vec![qualified("foo", "bar")]),
            ("foo/bar", vec![qualified("foo", "bar")]),
            (">=dev-lang/python-3.11", vec![qualified("dev-lang", "python")]),
            ("~app-shells/zsh-5.9-r2", vec![qualified("app-shells", "zsh")]),
            ("=x11-libs/gtk+-2.24.33", vec![qualified("x11-libs", "gtk+")]),
            (
                "dev-libs/glib-2.76[introspection]",
                vec![qualified("dev-libs", "glib")],
            ),
            // Every word-shaped token comes back; noise words are weeded out
            // later by the directory existence check.
            (
                "crash in app-editors/vim-9.0.1000 on startup",
                vec![
                    bare("crash"),
                    bare("in"),
                    qualified("app-editors", "vim"),
                    bare("on"),
                    bare("startup"),
                ],
            ),
            // A slot on an unversioned atom is not recognized as a suffix;
            // the caller's `:` pre-pass exists for exactly this reason.
            ("app-misc/foo:2", vec![qualified("app-misc", "foo:2")]),
            ("(parenthesized)", vec![]),
        ];

        for (input, expected) in examples {
            assert_eq!(extract_atoms(input), expected, "mismatch for `{}`", input);
        }
    }

    #[test]
    fn test_display_round_trips() {
        assert_eq!(qualified("sys-apps", "portage").to_string(), "sys-apps/portage");
        assert_eq!(bare("portage").to_string(), "portage");
    }
}
