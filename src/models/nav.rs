use serde::{Deserialize, Serialize};

/// Identifies a navigation entry within its level. Entries are keyed by label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the main navigation tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavEntry {
    /// Shown but not interactive
    Disabled { label: String },
    Link {
        label: String,
        href: String,
        #[serde(default)]
        description: Option<String>,
    },
    /// Opens a list of nested entries. `href` makes the dropdown label itself a link.
    Dropdown {
        label: String,
        #[serde(default)]
        href: Option<String>,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        heading: Option<String>,
        items: Vec<NavEntry>,
    },
}

impl NavEntry {
    pub fn label(&self) -> &str {
        match self {
            NavEntry::Disabled { label }
            | NavEntry::Link { label, .. }
            | NavEntry::Dropdown { label, .. } => label,
        }
    }

    pub fn id(&self) -> ItemId {
        ItemId::new(self.label())
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            NavEntry::Disabled { .. } => None,
            NavEntry::Link { href, .. } => Some(href),
            NavEntry::Dropdown { href, .. } => href.as_deref(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            NavEntry::Disabled { .. } => None,
            NavEntry::Link { description, .. } | NavEntry::Dropdown { description, .. } => {
                description.as_deref()
            }
        }
    }

    pub fn items(&self) -> &[NavEntry] {
        match self {
            NavEntry::Dropdown { items, .. } => items,
            _ => &[],
        }
    }

    pub fn is_dropdown(&self) -> bool {
        matches!(self, NavEntry::Dropdown { .. })
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, NavEntry::Disabled { .. })
    }

    /// Finds the enabled dropdown with the given id among `entries`
    pub fn find_dropdown<'a>(entries: &'a [NavEntry], id: &ItemId) -> Option<&'a NavEntry> {
        entries
            .iter()
            .find(|entry| entry.is_dropdown() && entry.label() == id.as_str())
    }
}

/// Returns the in-page section id an href points at (`#specs` or `/#specs`)
pub fn anchor_of(href: &str) -> Option<&str> {
    href.strip_prefix("/#")
        .or_else(|| href.strip_prefix('#'))
        .filter(|id| !id.is_empty())
}

/// Whether `href` is the page at `pathname`. In-page anchors never are.
pub fn is_current_route(pathname: &str, href: &str) -> bool {
    if anchor_of(href).is_some() {
        return false;
    }
    fn trim(path: &str) -> &str {
        match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        }
    }
    trim(pathname) == trim(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_route_matches_path_only() {
        assert!(is_current_route("/", "/"));
        assert!(is_current_route("/earth-rite-mgv", "/earth-rite-mgv"));
        assert!(is_current_route("/earth-rite-mgv/", "/earth-rite-mgv"));
        assert!(!is_current_route("/", "/earth-rite-mgv"));
        assert!(!is_current_route("/", "/#specs"));
    }

    #[test]
    fn anchors_are_recognised_with_and_without_root() {
        assert_eq!(anchor_of("/#specs"), Some("specs"));
        assert_eq!(anchor_of("#cta"), Some("cta"));
        assert_eq!(anchor_of("/earth-rite-mgv"), None);
        assert_eq!(anchor_of("/#"), None);
    }

    #[test]
    fn entries_deserialize_from_tagged_json() {
        let json = r#"[
            { "kind": "disabled", "label": "Tester" },
            { "kind": "link", "label": "MGV", "href": "/earth-rite-mgv" },
            { "kind": "dropdown", "label": "Earth-Rite", "items": [
                { "kind": "link", "label": "Specifiche", "href": "/#specs" }
            ] }
        ]"#;
        let entries: Vec<NavEntry> = serde_json::from_str(json).unwrap();

        assert!(entries[0].is_disabled());
        assert_eq!(entries[0].href(), None);
        assert_eq!(entries[1].href(), Some("/earth-rite-mgv"));
        assert_eq!(entries[2].items().len(), 1);
        assert!(NavEntry::find_dropdown(&entries, &"Earth-Rite".into()).is_some());
        assert!(NavEntry::find_dropdown(&entries, &"MGV".into()).is_none());
    }
}
