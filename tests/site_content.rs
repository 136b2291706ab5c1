use std::collections::HashMap;

use earthrite::content::SiteContent;
use earthrite::models::{anchor_of, ItemId, NavEntry, SectionId};
use earthrite::state::{NavMenu, NavState, PointerTarget, ScrollTracker, SectionProbe};

/// Lays the registered sections out one after another, each `height` tall
struct StackedPage {
    tops: HashMap<SectionId, f64>,
}

impl StackedPage {
    fn new(site: &SiteContent, height: f64) -> Self {
        let tops = site
            .sections
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i as f64 * height))
            .collect();
        Self { tops }
    }

    fn scrolled(&self, offset_y: f64) -> Viewport<'_> {
        Viewport {
            page: self,
            offset_y,
        }
    }
}

struct Viewport<'a> {
    page: &'a StackedPage,
    offset_y: f64,
}

impl SectionProbe for Viewport<'_> {
    fn top_of(&self, id: &SectionId) -> Option<f64> {
        self.page.tops.get(id).map(|top| top - self.offset_y)
    }
}

fn site() -> SiteContent {
    SiteContent::load().expect("embedded content is valid")
}

fn anchors(entries: &[NavEntry], out: &mut Vec<String>) {
    for entry in entries {
        if let Some(anchor) = entry.href().and_then(anchor_of) {
            out.push(anchor.to_string());
        }
        anchors(entry.items(), out);
    }
}

#[test]
fn every_menu_anchor_targets_a_registered_section() {
    let site = site();
    let mut found = Vec::new();
    anchors(&site.navigation, &mut found);

    assert!(!found.is_empty());
    for anchor in found {
        assert!(
            site.sections.iter().any(|s| s.id.as_str() == anchor),
            "#{anchor} is not a registered section"
        );
    }
}

#[test]
fn selecting_a_section_link_closes_the_whole_menu() {
    let site = site();
    let mut menu = NavMenu::new(site.navigation.clone());

    menu.toggle_top_level(&ItemId::from("Earth-Rite"));
    menu.open_submenu(&ItemId::from("Earth-Rite RTR"));
    assert!(menu.is_submenu_open(&ItemId::from("Earth-Rite RTR")));

    menu.select_link("/#specs");
    assert_eq!(menu.state(), &NavState::default());
}

#[test]
fn disabled_products_never_open() {
    let site = site();
    let mut menu = NavMenu::new(site.navigation.clone());

    for entry in site.navigation.iter().filter(|e| e.is_disabled()) {
        menu.toggle_top_level(&entry.id());
        assert!(!menu.state().any_open(), "{} opened", entry.label());
    }
}

#[test]
fn outside_click_after_mobile_navigation_resets_everything() {
    let site = site();
    let mut menu = NavMenu::new(site.navigation);

    menu.toggle_mobile_menu();
    menu.toggle_top_level(&ItemId::from("Earth-Rite"));
    menu.handle_outside_interaction(PointerTarget::Inside);
    assert!(menu.state().is_mobile_menu_open());

    menu.handle_outside_interaction(PointerTarget::Outside);
    assert_eq!(menu.state(), &NavState::default());
}

#[test]
fn scrolling_down_the_page_visits_sections_in_order() {
    let site = site();
    let page = StackedPage::new(&site, 800.0);
    let mut tracker = ScrollTracker::new(site.sections.clone()).expect("sections are registered");

    let mut visited = vec![tracker.state().active_section().clone()];
    let mut offset = 0.0;
    while offset <= 800.0 * site.sections.len() as f64 {
        let tops = tracker.measure(&page.scrolled(offset));
        tracker.on_scroll(offset, &tops);
        let active = tracker.state().active_section();
        if visited.last() != Some(active) {
            visited.push(active.clone());
        }
        offset += 100.0;
    }

    let expected: Vec<SectionId> = site.sections.iter().map(|s| s.id.clone()).collect();
    assert_eq!(visited, expected);
    assert!(tracker.state().is_past_threshold());
}

#[test]
fn unrendered_sections_are_skipped() {
    let site = site();
    let mut page = StackedPage::new(&site, 800.0);
    let social = SectionId::from("social");
    let social_top = page.tops.remove(&social).expect("social is registered");

    let mut tracker = ScrollTracker::new(site.sections.clone()).expect("sections are registered");
    let viewport = page.scrolled(social_top);
    let tops = tracker.measure(&viewport);
    tracker.on_scroll(social_top, &tops);

    assert!(tops.iter().all(|(id, _)| *id != social));
    assert_ne!(tracker.state().active_section(), &social);
}
