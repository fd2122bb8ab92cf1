//! Fixed software catalog: display name → native package name.

/// Built-in catalog entries, in the order shown to users.
///
/// Display names are unique; each maps to exactly one native package name.
const ENTRIES: &[(&str, &str)] = &[
    ("git", "git"),
    ("curl", "curl"),
    ("wget", "wget"),
    ("vim", "vim"),
    ("htop", "htop"),
    ("docker", "docker.io"),
    ("nginx", "nginx"),
    ("nodejs", "nodejs"),
    ("python3-pip", "python3-pip"),
];

/// Immutable mapping from user-facing software names to native package names.
///
/// Constructed once at startup and passed by reference into the engine.
/// Read-only, so safe to share across concurrent invocations.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [(&'static str, &'static str)],
}

impl Default for Catalog {
    fn default() -> Self {
        Self { entries: ENTRIES }
    }
}

impl Catalog {
    /// Resolve a display name to its native package name.
    #[must_use]
    pub fn lookup(&self, display_name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == display_name)
            .map(|(_, package)| *package)
    }

    /// Display names in listing order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// (display name, native package name) pairs in listing order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Comma-separated display names, for error messages.
    #[must_use]
    pub fn valid_names(&self) -> String {
        self.names().collect::<Vec<_>>().join(", ")
    }
}
