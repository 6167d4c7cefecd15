//! Error types for the bundle-restrict CLI.

use std::path::PathBuf;

/// Errors from stats loading, configuration, tree construction, and the
/// final restriction verdict.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Cannot read the stats dump from disk.
    #[error("cannot read stats '{}': {source}", .path.display())]
    StatsRead {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Stats dump is not valid JSON or has the wrong shape.
    #[error("invalid stats '{}': {source}", .path.display())]
    StatsParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Cannot read the configuration file.
    #[error("cannot read config '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration file is not valid TOML or has unknown keys.
    #[error("invalid config '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// A required option was given neither on the command line nor in the
    /// config file.
    #[error("missing required option '{0}'")]
    MissingOption(&'static str),
    /// A traversal bound was set to zero.
    #[error("{0} must be at least 1")]
    ZeroBound(&'static str),
    /// The module asked about is not in the stats dump.
    #[error("module '{0}' not found in stats")]
    UnknownModule(String),
    /// Tree builder was asked to attach a sibling to the root.
    #[error("cannot add a sibling to the root node")]
    SiblingOfRoot,
    /// Tree builder walked past the root looking for an ancestor.
    #[error("cannot walk above the root looking for depth {0}")]
    AboveRoot(isize),
    /// One or more restricted modules are part of the chunk.
    #[error("{0}")]
    RestrictedModules(String),
}

impl Error {
    /// User-facing hint to accompany the error message.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::MissingOption("chunk") => {
                Some("pass --chunk or set `chunk` in the config file")
            }
            Self::ZeroBound(_) => Some("use a positive value, or omit it for the default of 3"),
            Self::UnknownModule(_) => {
                Some("modules are matched by identity (resolved path) or by request")
            }
            Self::SiblingOfRoot | Self::AboveRoot(_) => {
                Some("provenance events must start at depth 0 and be in pre-order")
            }
            _ => None,
        }
    }
}
