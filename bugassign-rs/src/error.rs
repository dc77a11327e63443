use std::{io, path::PathBuf};

use thiserror::Error;

/// Why contact resolution produced nothing for a metadata directory.
///
/// Callers that aggregate across directories treat both variants as an empty
/// contribution; the distinction exists so the condition is at least
/// inspectable rather than swallowed outright.
#[derive(Debug, Error)]
pub enum Error {
    /// The tree-wide herd registry could not be read or parsed, so no
    /// directory can be resolved this run.
    #[error("herd registry at {path} is unavailable")]
    RegistryUnavailable { path: PathBuf },

    /// The directory's own metadata file could not be read or parsed.
    #[error("no readable metadata for {dir}")]
    Metadata {
        dir: String,
        #[source]
        source: ParseError,
    },
}

/// A low-level failure while loading one of the tree's XML files.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Xml(#[from] roxmltree::Error),
}
