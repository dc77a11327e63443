use std::{
    env, fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::atom::PackageAtom;

/// Environment variable naming the package tree root.
pub const ROOT_ENV: &str = "PORTDIR";

/// Tree root used when [`ROOT_ENV`] is unset.
pub const DEFAULT_ROOT: &str = "/usr/portage";

const METADATA_FILE: &str = "metadata.xml";

/// Read-only view of an on-disk package tree laid out as
/// `<root>/<category>/<package>/metadata.xml`, with the herd registry at
/// `<root>/metadata/herds.xml`.
#[derive(Debug, Clone)]
pub struct PackageTree {
    root: PathBuf,
}

impl PackageTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Tree rooted at `$PORTDIR`, falling back to the standard system
    /// location.
    pub fn from_env() -> Self {
        match env::var_os(ROOT_ENV) {
            Some(root) => Self::new(PathBuf::from(root)),
            None => Self::new(DEFAULT_ROOT),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn herds_path(&self) -> PathBuf {
        self.root.join("metadata").join("herds.xml")
    }

    /// Path to the metadata file for a directory returned by [`locate`].
    ///
    /// [`locate`]: Self::locate
    pub fn metadata_path(&self, dir: &str) -> PathBuf {
        self.root.join(dir).join(METADATA_FILE)
    }

    /// Resolve an atom to the metadata directories that exist for it, as
    /// paths relative to the tree root. Atoms that match nothing contribute
    /// nothing; duplicates across atoms are possible and left to the caller.
    pub fn locate(&self, atom: &PackageAtom) -> Vec<String> {
        match &atom.category {
            Some(category) => self.locate_qualified(category, &atom.name),
            None => self.locate_bare(&atom.name),
        }
    }

    fn locate_qualified(&self, category: &str, name: &str) -> Vec<String> {
        let qualified = format!("{category}/{name}");
        if self.root.join(&qualified).is_dir() {
            return vec![qualified];
        }
        // Fall back to category granularity when the package itself is not
        // in the tree.
        if self.root.join(category).is_dir() {
            return vec![category.to_string()];
        }
        debug!(atom = %qualified, "no matching directory in tree");
        Vec::new()
    }

    /// Every `<category>/<name>` directory holding a metadata file, across
    /// all categories. Sorted so that the result does not depend on
    /// directory enumeration order.
    fn locate_bare(&self, name: &str) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.root) else {
            debug!(root = %self.root.display(), "unreadable tree root");
            return Vec::new();
        };

        let mut dirs: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map_or(false, |ty| ty.is_dir()))
            .filter(|entry| entry.path().join(name).join(METADATA_FILE).is_file())
            .map(|entry| format!("{}/{}", entry.file_name().to_string_lossy(), name))
            .collect();
        dirs.sort();
        dirs
    }
}
