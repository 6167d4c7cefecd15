//! Loading a [`ReasonGraph`] from a build stats dump.
//!
//! The dump is a JSON document with two top-level arrays: `modules`, each
//! entry listing the identities of the modules that caused its inclusion,
//! and `chunks`, each naming its emitted files and member modules.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::graph::{ModuleId, ReasonGraph};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StatsDump {
    #[serde(default)]
    pub chunks: Vec<ChunkEntry>,
    #[serde(default)]
    pub modules: Vec<ModuleEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChunkEntry {
    pub name: String,
    #[serde(default)]
    pub files: Vec<String>,
    /// Identities of the modules bundled in this chunk.
    #[serde(default)]
    pub modules: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModuleEntry {
    pub identity: String,
    #[serde(default)]
    pub request: String,
    #[serde(default)]
    pub reasons: Vec<ReasonEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReasonEntry {
    /// Identity of the importing module, if the build tool recorded one.
    #[serde(default)]
    pub module: Option<String>,
}

impl StatsDump {
    /// Resolve identities into a graph. Modules are added in dump order so
    /// that ids are stable; reasons and chunk members naming an unknown
    /// identity get a placeholder module with no reasons.
    ///
    /// Entries with an empty identity each get their own node. References
    /// to the empty identity cannot say which of them they mean, so each
    /// one gets a fresh placeholder.
    pub fn into_graph(self) -> ReasonGraph {
        let mut graph = ReasonGraph::new();
        let ids: Vec<ModuleId> = self
            .modules
            .iter()
            .map(|entry| resolve(&mut graph, &entry.identity, &entry.request))
            .collect();
        for (entry, id) in self.modules.into_iter().zip(ids) {
            for reason in entry.reasons {
                let because_of = reason.module.map(|identity| resolve(&mut graph, &identity, ""));
                graph.add_reason(id, because_of);
            }
        }
        for chunk in self.chunks {
            let members = chunk
                .modules
                .iter()
                .map(|identity| resolve(&mut graph, identity, ""))
                .collect();
            graph.add_chunk(&chunk.name, chunk.files, members);
        }
        graph
    }
}

fn resolve(graph: &mut ReasonGraph, identity: &str, request: &str) -> ModuleId {
    if identity.is_empty() {
        graph.add_anonymous_module(request)
    } else {
        graph.add_module(identity, request)
    }
}

pub fn parse_stats(json: &str, path: &Path) -> Result<ReasonGraph, Error> {
    let dump: StatsDump = serde_json::from_str(json).map_err(|source| Error::StatsParse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(dump.into_graph())
}

/// Read and resolve a stats dump from disk.
pub fn load_stats(path: &Path) -> Result<ReasonGraph, Error> {
    let json = fs::read_to_string(path).map_err(|source| Error::StatsRead {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_stats(&json, path)?;
    tracing::debug!(
        path = %path.display(),
        modules = graph.module_count(),
        chunks = graph.chunks.len(),
        "loaded stats"
    );
    Ok(graph)
}
