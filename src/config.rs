//! Run options: defaults, TOML config file, and command-line overrides.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;
use crate::logger::Level;
use crate::traversal::Bounds;

pub const DEFAULT_MAX_DEPTH: usize = 3;
pub const DEFAULT_MAX_WIDTH: usize = 3;
pub const DEFAULT_INDENT: usize = 2;

/// Partially specified options. Used both for the config file and for the
/// command-line layer; [`PartialOptions::or`] stacks them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialOptions {
    pub chunk: Option<String>,
    pub modules: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub max_width: Option<usize>,
    pub indent: Option<usize>,
    pub log: Option<Level>,
}

/// Fully resolved options for one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Chunk name, or the name of one of its emitted files.
    pub chunk: String,
    /// Deny-listed module requests.
    pub modules: Vec<String>,
    pub bounds: Bounds,
    pub indent: usize,
    pub log: Level,
    /// Leading path replaced by `.` in rendered identities. Empty disables
    /// shortening.
    pub prefix: String,
}

/// Apply bound defaults; both bounds must be positive.
pub fn resolve_bounds(max_depth: Option<usize>, max_width: Option<usize>) -> Result<Bounds, Error> {
    let max_depth = max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
    let max_width = max_width.unwrap_or(DEFAULT_MAX_WIDTH);
    if max_depth == 0 {
        return Err(Error::ZeroBound("max-depth"));
    }
    if max_width == 0 {
        return Err(Error::ZeroBound("max-width"));
    }
    Ok(Bounds {
        max_depth,
        max_width,
    })
}

impl PartialOptions {
    pub fn parse(text: &str, path: &Path) -> Result<Self, Error> {
        toml::from_str(text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Values set in `self` win; unset ones come from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            chunk: self.chunk.or(fallback.chunk),
            modules: self.modules.or(fallback.modules),
            max_depth: self.max_depth.or(fallback.max_depth),
            max_width: self.max_width.or(fallback.max_width),
            indent: self.indent.or(fallback.indent),
            log: self.log.or(fallback.log),
        }
    }

    /// Apply defaults and validate.
    pub fn resolve(self) -> Result<Options, Error> {
        let chunk = self.chunk.ok_or(Error::MissingOption("chunk"))?;
        Ok(Options {
            chunk,
            modules: self.modules.unwrap_or_default(),
            bounds: resolve_bounds(self.max_depth, self.max_width)?,
            indent: self.indent.unwrap_or(DEFAULT_INDENT),
            log: self.log.unwrap_or_default(),
            prefix: String::new(),
        })
    }
}
