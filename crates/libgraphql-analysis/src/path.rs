use std::fmt;
use std::sync::Arc;

/// One step in a [`Path`]: either a position within a list or a named
/// member.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum PathKey {
    Index(usize),
    Name(String),
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(idx) => write!(f, "{idx}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<usize> for PathKey {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl From<&str> for PathKey {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for PathKey {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

/// An immutable, structurally shared trail of keys from some root to a
/// node.
///
/// Each `Path` points at its predecessor and is never modified after
/// construction, so many branches of a traversal can extend the same prefix
/// without copying it.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    key: PathKey,
    prev: Option<Arc<Path>>,
    typename: Option<String>,
}

impl Path {
    /// Build a new path one step longer than `prev`. O(1); `prev` is shared,
    /// not copied.
    pub fn extend(
        prev: Option<Arc<Path>>,
        key: impl Into<PathKey>,
        typename: Option<&str>,
    ) -> Arc<Path> {
        Arc::new(Path {
            key: key.into(),
            prev,
            typename: typename.map(str::to_string),
        })
    }

    pub fn key(&self) -> &PathKey {
        &self.key
    }

    pub fn prev(&self) -> Option<&Arc<Path>> {
        self.prev.as_ref()
    }

    pub fn typename(&self) -> Option<&str> {
        self.typename.as_deref()
    }

    /// Iterate from this (leaf) entry back towards the root.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        std::iter::successors(Some(self), |path| path.prev.as_deref())
    }

    /// The keys of this path, ordered root to leaf.
    pub fn to_vec(&self) -> Vec<PathKey> {
        let mut keys: Vec<PathKey> =
            self.iter()
                .map(|path| path.key.clone())
                .collect();
        keys.reverse();
        keys
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys = self.to_vec();
        for (idx, key) in keys.iter().enumerate() {
            if idx > 0 {
                write!(f, ".")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}
