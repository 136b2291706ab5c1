use serde::{Deserialize, Serialize};

/// Anchor id of a page section (`<section id=...>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tracked region of the single-page layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub label: String,
}

/// Outbound destinations used by the page sections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteLinks {
    pub datasheet: String,
    pub video: String,
    pub phone: String,
    pub email: String,
    pub maps: String,
}
