//! Per-module registry of styling-library bindings.

use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};

use super::canonical::CanonicalApi;

/// Per-module symbol table mapping canonical members to local alias names.
///
/// Created fresh for each module, filled during the single scan pass, and
/// read-only afterward. Writes are additive set unions: duplicate adds
/// collapse and statement order never affects the final contents. Never
/// shared or merged across modules.
#[derive(Debug, Clone, Default)]
pub struct ImportRegistry {
    bindings: FxHashMap<CanonicalApi, FxHashSet<String>>,
    import_paths: FxHashSet<String>,
}

impl ImportRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a local name to a canonical member.
    pub fn add_binding(&mut self, member: CanonicalApi, local: &str) {
        tracing::trace!(member = member.as_str(), local, "registered binding");
        self.bindings
            .entry(member)
            .or_default()
            .insert(local.to_string());
    }

    /// Record a recognized source path. Recorded on any source match, even
    /// when no specifier in the statement resolved to a known member.
    pub fn record_import_path(&mut self, path: &str) {
        self.import_paths.insert(path.to_string());
    }

    /// Local names bound to `member`.
    pub fn bindings_for(&self, member: CanonicalApi) -> impl Iterator<Item = &str> {
        self.bindings
            .get(&member)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Whether `local` is bound to `member`.
    #[must_use]
    pub fn is_bound(&self, member: CanonicalApi, local: &str) -> bool {
        self.bindings
            .get(&member)
            .is_some_and(|set| set.contains(local))
    }

    /// Whether `local` names the whole library rather than a single member.
    #[must_use]
    pub fn is_whole_library(&self, local: &str) -> bool {
        self.is_bound(CanonicalApi::WholeLibrary, local)
    }

    /// Every local name bound to any canonical member. A name bound to more
    /// than one member is yielded once per member.
    pub fn local_names(&self) -> impl Iterator<Item = &str> {
        self.bindings.values().flatten().map(String::as_str)
    }

    /// Recognized source paths encountered in this module.
    pub fn import_paths(&self) -> impl Iterator<Item = &str> {
        self.import_paths.iter().map(String::as_str)
    }

    /// Whether the module imported the library at all.
    #[must_use]
    pub fn has_library_imports(&self) -> bool {
        !self.import_paths.is_empty()
    }

    /// Number of distinct (member, local) bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.values().map(FxHashSet::len).sum()
    }

    /// Whether no local binding was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.values().all(FxHashSet::is_empty)
    }

    /// Sorted snapshot of the non-empty member sets. Iteration order is
    /// deterministic, so summaries are directly comparable and loggable.
    #[must_use]
    pub fn summary(&self) -> BTreeMap<&'static str, Vec<String>> {
        let mut out = BTreeMap::new();
        for member in CanonicalApi::ALL {
            if let Some(set) = self.bindings.get(&member) {
                if !set.is_empty() {
                    let mut names: Vec<String> = set.iter().cloned().collect();
                    names.sort();
                    out.insert(member.as_str(), names);
                }
            }
        }
        out
    }
}
