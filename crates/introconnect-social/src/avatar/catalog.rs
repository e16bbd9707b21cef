use std::collections::HashSet;
use std::fmt;

use introconnect_common::SocialError;
use serde::{Deserialize, Serialize};

/// Built-in preset avatars.
pub const PRESET_AVATARS: &[&str] = &[
    "https://api.dicebear.com/7.x/fun-emoji/png?seed=Felix&size=128",
    "https://api.dicebear.com/7.x/fun-emoji/png?seed=Aneka&size=128",
    "https://api.dicebear.com/7.x/fun-emoji/png?seed=Milo&size=128",
    "https://api.dicebear.com/7.x/fun-emoji/png?seed=Luna&size=128",
    "https://api.dicebear.com/7.x/fun-emoji/png?seed=Oscar&size=128",
    "https://api.dicebear.com/7.x/fun-emoji/png?seed=Zoe&size=128",
    "https://api.dicebear.com/7.x/fun-emoji/png?seed=Kiki&size=128",
    "https://api.dicebear.com/7.x/fun-emoji/png?seed=Bandit&size=128",
    "https://api.dicebear.com/7.x/fun-emoji/png?seed=Pepper&size=128",
    "https://api.dicebear.com/7.x/fun-emoji/png?seed=Sasha&size=128",
    "https://api.dicebear.com/7.x/fun-emoji/png?seed=Tiger&size=128",
    "https://api.dicebear.com/7.x/fun-emoji/png?seed=Coco&size=128",
];

/// Reference to an avatar image (usually a URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvatarRef(String);

impl AvatarRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AvatarRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AvatarRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AvatarRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for AvatarRef {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Non-empty list of distinct avatar references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarCatalog {
    entries: Vec<AvatarRef>,
}

impl AvatarCatalog {
    /// Build a catalog, rejecting an empty list or repeated entries.
    pub fn new<I, S>(entries: I) -> Result<Self, SocialError>
    where
        I: IntoIterator<Item = S>,
        S: Into<AvatarRef>,
    {
        let entries: Vec<AvatarRef> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Err(SocialError::EmptyCatalog);
        }

        if let Some(dup) = first_duplicate(&entries) {
            return Err(SocialError::DuplicateAvatar(dup.to_string()));
        }

        Ok(Self { entries })
    }

    /// The catalog backed by [`PRESET_AVATARS`].
    pub fn builtin() -> Self {
        Self {
            entries: PRESET_AVATARS.iter().copied().map(AvatarRef::from).collect(),
        }
    }

    pub fn entries(&self) -> &[AvatarRef] {
        &self.entries
    }

    /// Head of the catalog; there is always one.
    pub fn first(&self) -> &AvatarRef {
        &self.entries[0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.entries.iter().any(|e| e == reference)
    }
}

fn first_duplicate(entries: &[AvatarRef]) -> Option<&AvatarRef> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries.iter().find(|&e| !seen.insert(e.as_str()))
}

impl Default for AvatarCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
