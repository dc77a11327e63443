use tracing::debug;

use crate::error::Error;
use crate::herds::HerdRegistry;
use crate::metadata;
use crate::tree::PackageTree;

enum HerdCache {
    Unloaded,
    Ready(HerdRegistry),
    Unavailable,
}

/// Per-run resolution context.
///
/// Borrows the tree and memoizes the herd registry so it is parsed at most
/// once no matter how many directories are resolved; a failed load is
/// memoized the same way.
pub struct Resolver<'a> {
    tree: &'a PackageTree,
    herds: HerdCache,
}

impl<'a> Resolver<'a> {
    pub fn new(tree: &'a PackageTree) -> Self {
        Self {
            tree,
            herds: HerdCache::Unloaded,
        }
    }

    /// Contact addresses declared by a metadata directory, in document
    /// order, duplicates included.
    pub fn resolve(&mut self, dir: &str) -> Result<Vec<String>, Error> {
        let metadata_path = self.tree.metadata_path(dir);
        let herds_path = self.tree.herds_path();
        let Some(herds) = self.herds() else {
            return Err(Error::RegistryUnavailable { path: herds_path });
        };
        metadata::contacts_in(&metadata_path, herds).map_err(|source| Error::Metadata {
            dir: dir.to_string(),
            source,
        })
    }

    fn herds(&mut self) -> Option<&HerdRegistry> {
        if let HerdCache::Unloaded = self.herds {
            let path = self.tree.herds_path();
            self.herds = match HerdRegistry::load(&path) {
                Ok(registry) => HerdCache::Ready(registry),
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "herd registry unavailable");
                    HerdCache::Unavailable
                }
            };
        }
        match &self.herds {
            HerdCache::Ready(registry) => Some(registry),
            _ => None,
        }
    }
}
