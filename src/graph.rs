//! Reason graph data structures.
//!
//! A [`ReasonGraph`] records, for every module of a build, the list of
//! reasons it was included. Each [`Reason`] points back at the module that
//! caused the inclusion, so edges run from an included module towards its
//! importers. Nodes are dense `u32`-indexed [`ModuleId`]s. The graph may
//! contain cycles.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ModuleId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reason {
    /// Module responsible for the inclusion. `None` when the build tool
    /// recorded a reason without an originating module (e.g. an entry).
    pub module: Option<ModuleId>,
}

#[derive(Debug, Clone)]
pub struct Module {
    pub id: ModuleId,
    /// Stable identity, usually the resolved file path. May be empty.
    pub identity: String,
    /// The request string the module was imported with (e.g. "lodash").
    pub request: String,
    pub reasons: Vec<Reason>,
}

#[derive(Debug, Clone)]
pub struct Chunk {
    pub name: String,
    pub files: Vec<String>,
    pub modules: Vec<ModuleId>,
}

#[derive(Debug, Clone, Default)]
pub struct ReasonGraph {
    pub modules: Vec<Module>,
    pub chunks: Vec<Chunk>,
    pub identity_to_id: HashMap<String, ModuleId>,
}

impl ReasonGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module, or return the existing one with the same identity.
    /// The request is only recorded the first time an identity is seen,
    /// unless the existing entry has none yet.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_module(&mut self, identity: &str, request: &str) -> ModuleId {
        if let Some(&id) = self.identity_to_id.get(identity) {
            let module = &mut self.modules[id.0 as usize];
            if module.request.is_empty() {
                request.clone_into(&mut module.request);
            }
            return id;
        }
        let id = ModuleId(self.modules.len() as u32);
        self.modules.push(Module {
            id,
            identity: identity.to_owned(),
            request: request.to_owned(),
            reasons: Vec::new(),
        });
        self.identity_to_id.insert(identity.to_owned(), id);
        id
    }

    /// Add a module with no identity. Such modules are never merged with
    /// each other and cannot be looked up by identity.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_anonymous_module(&mut self, request: &str) -> ModuleId {
        let id = ModuleId(self.modules.len() as u32);
        self.modules.push(Module {
            id,
            identity: String::new(),
            request: request.to_owned(),
            reasons: Vec::new(),
        });
        id
    }

    /// Record that `module` was included because of `because_of`.
    /// Duplicate reasons are kept: the build tool may legitimately list
    /// the same importer more than once.
    pub fn add_reason(&mut self, module: ModuleId, because_of: Option<ModuleId>) {
        self.modules[module.0 as usize]
            .reasons
            .push(Reason { module: because_of });
    }

    pub fn add_chunk(&mut self, name: &str, files: Vec<String>, modules: Vec<ModuleId>) {
        self.chunks.push(Chunk {
            name: name.to_owned(),
            files,
            modules,
        });
    }

    pub fn module(&self, id: ModuleId) -> &Module {
        &self.modules[id.0 as usize]
    }

    pub fn reasons(&self, id: ModuleId) -> &[Reason] {
        &self.modules[id.0 as usize].reasons
    }

    /// Target of a reason when it names a module with a non-empty identity.
    /// Reasons that fail this check are ignored by every traversal.
    pub fn named_target(&self, reason: Reason) -> Option<&Module> {
        reason
            .module
            .map(|id| self.module(id))
            .filter(|m| !m.identity.is_empty())
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Find a chunk by name or by one of its emitted file names.
    pub fn find_chunk(&self, name_or_file: &str) -> Option<&Chunk> {
        self.chunks
            .iter()
            .find(|c| c.name == name_or_file || c.files.iter().any(|f| f == name_or_file))
    }

    /// Look a module up by identity first, then by request.
    pub fn find_module(&self, key: &str) -> Option<ModuleId> {
        self.identity_to_id.get(key).copied().or_else(|| {
            self.modules
                .iter()
                .find(|m| m.request == key)
                .map(|m| m.id)
        })
    }
}
