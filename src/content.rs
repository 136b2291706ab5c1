//! Site content: navigation tree, section registry and outbound links.
//!
//! The content ships as `content/site.json`, embedded at compile time and
//! validated before anything renders from it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{anchor_of, NavEntry, Section, SiteLinks};

const EMBEDDED: &str = include_str!("../content/site.json");

/// Navigation nests at most a top level plus one submenu below a dropdown.
const MAX_NAV_DEPTH: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Malformed site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Section registry is empty")]
    NoSections,
    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),
    #[error("Duplicate navigation label: {0}")]
    DuplicateLabel(String),
    #[error("Dropdown has no entries: {0}")]
    EmptyDropdown(String),
    #[error("Navigation nested too deep under: {0}")]
    TooDeep(String),
    #[error("{label} links to unknown section #{anchor}")]
    UnknownAnchor { label: String, anchor: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteContent {
    pub navigation: Vec<NavEntry>,
    pub sections: Vec<Section>,
    pub links: SiteLinks,
}

impl SiteContent {
    /// Loads the content bundled with the binary
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.sections.is_empty() {
            return Err(ContentError::NoSections);
        }

        let mut ids = HashSet::new();
        for section in &self.sections {
            if !ids.insert(section.id.as_str()) {
                return Err(ContentError::DuplicateSection(section.id.to_string()));
            }
        }

        self.validate_level(&self.navigation, 1, &ids)
    }

    fn validate_level(
        &self,
        entries: &[NavEntry],
        depth: usize,
        sections: &HashSet<&str>,
    ) -> Result<(), ContentError> {
        let mut labels = HashSet::new();

        for entry in entries {
            if !labels.insert(entry.label()) {
                return Err(ContentError::DuplicateLabel(entry.label().to_string()));
            }

            if let Some(anchor) = entry.href().and_then(anchor_of) {
                if !sections.contains(anchor) {
                    return Err(ContentError::UnknownAnchor {
                        label: entry.label().to_string(),
                        anchor: anchor.to_string(),
                    });
                }
            }

            if let NavEntry::Dropdown { label, items, .. } = entry {
                if items.is_empty() {
                    return Err(ContentError::EmptyDropdown(label.clone()));
                }
                if depth + 1 > MAX_NAV_DEPTH {
                    return Err(ContentError::TooDeep(label.clone()));
                }
                self.validate_level(items, depth + 1, sections)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINKS: &str = r#""links": {
        "datasheet": "/rtr.pdf", "video": "https://example.com/v",
        "phone": "+39000", "email": "info@example.com", "maps": "https://maps.example.com"
    }"#;

    fn content(navigation: &str, sections: &str) -> String {
        format!(r#"{{ "navigation": {navigation}, "sections": {sections}, {LINKS} }}"#)
    }

    #[test]
    fn embedded_content_is_valid() {
        let site = SiteContent::load().expect("embedded content must load");
        assert_eq!(site.sections[0].id.as_str(), "hero");
        assert!(site.navigation.iter().any(NavEntry::is_dropdown));
    }

    #[test]
    fn rejects_empty_registry() {
        let json = content("[]", "[]");
        assert!(matches!(
            SiteContent::from_json(&json),
            Err(ContentError::NoSections)
        ));
    }

    #[test]
    fn rejects_duplicate_section_ids() {
        let json = content(
            "[]",
            r#"[{ "id": "hero", "label": "A" }, { "id": "hero", "label": "B" }]"#,
        );
        assert!(matches!(
            SiteContent::from_json(&json),
            Err(ContentError::DuplicateSection(id)) if id == "hero"
        ));
    }

    #[test]
    fn rejects_anchor_to_unknown_section() {
        let json = content(
            r##"[{ "kind": "link", "label": "Specs", "href": "/#specs" }]"##,
            r#"[{ "id": "hero", "label": "Hero" }]"#,
        );
        let err = SiteContent::from_json(&json).unwrap_err();
        assert_eq!(err.to_string(), "Specs links to unknown section #specs");
    }

    #[test]
    fn rejects_duplicate_labels_within_a_level() {
        let json = content(
            r#"[{ "kind": "disabled", "label": "Tester" }, { "kind": "disabled", "label": "Tester" }]"#,
            r#"[{ "id": "hero", "label": "Hero" }]"#,
        );
        assert!(matches!(
            SiteContent::from_json(&json),
            Err(ContentError::DuplicateLabel(_))
        ));
    }

    #[test]
    fn rejects_empty_dropdown() {
        let json = content(
            r#"[{ "kind": "dropdown", "label": "Earth-Rite", "items": [] }]"#,
            r#"[{ "id": "hero", "label": "Hero" }]"#,
        );
        assert!(matches!(
            SiteContent::from_json(&json),
            Err(ContentError::EmptyDropdown(label)) if label == "Earth-Rite"
        ));
    }

    #[test]
    fn rejects_third_dropdown_level() {
        let json = content(
            r#"[{ "kind": "dropdown", "label": "A", "items": [
                { "kind": "dropdown", "label": "B", "items": [
                    { "kind": "dropdown", "label": "C", "items": [
                        { "kind": "disabled", "label": "D" }
                    ] }
                ] }
            ] }]"#,
            r#"[{ "id": "hero", "label": "Hero" }]"#,
        );
        assert!(matches!(
            SiteContent::from_json(&json),
            Err(ContentError::TooDeep(label)) if label == "C"
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteContent::from_json("{"),
            Err(ContentError::Parse(_))
        ));
    }
}
