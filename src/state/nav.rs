//! Open/closed bookkeeping for the header navigation.
//!
//! At most one branch of the menu tree is open: one top-level dropdown and,
//! below it, one nested submenu. The mobile menu flag is independent of both.

use crate::models::{ItemId, NavEntry};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    open_top_level: Option<ItemId>,
    open_submenu: Option<ItemId>,
    mobile_menu_open: bool,
}

impl NavState {
    pub fn open_top_level(&self) -> Option<&ItemId> {
        self.open_top_level.as_ref()
    }

    pub fn open_submenu(&self) -> Option<&ItemId> {
        self.open_submenu.as_ref()
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// True while a dropdown, a submenu or the mobile menu is showing
    pub fn any_open(&self) -> bool {
        self.open_top_level.is_some() || self.open_submenu.is_some() || self.mobile_menu_open
    }

    fn close_dropdowns(&mut self) {
        self.open_top_level = None;
        self.open_submenu = None;
    }

    fn close_all(&mut self) {
        self.close_dropdowns();
        self.mobile_menu_open = false;
    }
}

/// Where a pointer-down landed relative to the open menu containers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Inside,
    Outside,
}

/// The navigation tree together with its open/closed state
#[derive(Debug, Clone, PartialEq)]
pub struct NavMenu {
    entries: Vec<NavEntry>,
    state: NavState,
}

impl NavMenu {
    pub fn new(entries: Vec<NavEntry>) -> Self {
        Self {
            entries,
            state: NavState::default(),
        }
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn is_top_level_open(&self, item: &ItemId) -> bool {
        self.state.open_top_level.as_ref() == Some(item)
    }

    pub fn is_submenu_open(&self, item: &ItemId) -> bool {
        self.state.open_submenu.as_ref() == Some(item)
    }

    /// Opens `item`'s dropdown, or closes it if it is already the open one.
    /// Anything that is not an enabled top-level dropdown is ignored.
    pub fn toggle_top_level(&mut self, item: &ItemId) {
        if NavEntry::find_dropdown(&self.entries, item).is_none() {
            return;
        }

        if self.is_top_level_open(item) {
            self.state.close_dropdowns();
        } else {
            self.state.open_top_level = Some(item.clone());
            self.state.open_submenu = None;
        }
    }

    /// Opens the nested submenu `item`, which must belong to the open dropdown
    pub fn open_submenu(&mut self, item: &ItemId) {
        let Some(parent) = self.state.open_top_level.as_ref() else {
            return;
        };
        let Some(parent) = NavEntry::find_dropdown(&self.entries, parent) else {
            return;
        };
        if NavEntry::find_dropdown(parent.items(), item).is_some() {
            self.state.open_submenu = Some(item.clone());
        }
    }

    pub fn close_submenu(&mut self) {
        self.state.open_submenu = None;
    }

    /// Tap/hover toggle used by the mobile accordion
    pub fn toggle_submenu(&mut self, item: &ItemId) {
        if self.is_submenu_open(item) {
            self.close_submenu();
        } else {
            self.open_submenu(item);
        }
    }

    pub fn handle_outside_interaction(&mut self, target: PointerTarget) {
        if target == PointerTarget::Outside {
            self.state.close_all();
        }
    }

    /// Clears all menu state ahead of following `_href`
    pub fn select_link(&mut self, _href: &str) {
        self.state.close_all();
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.state.mobile_menu_open = !self.state.mobile_menu_open;
    }

    /// Escape key
    pub fn dismiss(&mut self) {
        self.state.close_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(label: &str, href: &str) -> NavEntry {
        NavEntry::Link {
            label: label.into(),
            href: href.into(),
            description: None,
        }
    }

    fn dropdown(label: &str, items: Vec<NavEntry>) -> NavEntry {
        NavEntry::Dropdown {
            label: label.into(),
            href: None,
            description: None,
            heading: None,
            items,
        }
    }

    fn menu() -> NavMenu {
        NavMenu::new(vec![
            dropdown(
                "Earth-Rite",
                vec![
                    dropdown("RTR", vec![link("Specifiche", "/#specs")]),
                    link("MGV", "/earth-rite-mgv"),
                ],
            ),
            dropdown("Cen-Stat", vec![link("Cavi", "/cavi")]),
            link("Home", "/"),
            NavEntry::Disabled {
                label: "Tester".into(),
            },
        ])
    }

    fn id(label: &str) -> ItemId {
        ItemId::from(label)
    }

    #[test]
    fn starts_closed() {
        let menu = menu();
        assert_eq!(menu.state(), &NavState::default());
        assert!(!menu.state().any_open());
    }

    #[test]
    fn toggling_same_item_twice_round_trips() {
        let mut menu = menu();
        menu.toggle_top_level(&id("Earth-Rite"));
        assert!(menu.is_top_level_open(&id("Earth-Rite")));

        menu.toggle_top_level(&id("Earth-Rite"));
        assert_eq!(menu.state(), &NavState::default());
    }

    #[test]
    fn at_most_one_top_level_item_is_open() {
        let mut menu = menu();
        let sequence = ["Earth-Rite", "Cen-Stat", "Cen-Stat", "Earth-Rite", "Cen-Stat"];

        for label in sequence {
            menu.toggle_top_level(&id(label));
            let open = ["Earth-Rite", "Cen-Stat"]
                .iter()
                .filter(|l| menu.is_top_level_open(&id(l)))
                .count();
            assert!(open <= 1);
        }
        assert!(menu.is_top_level_open(&id("Cen-Stat")));
    }

    #[test]
    fn switching_top_level_closes_previous_submenu() {
        let mut menu = menu();
        menu.toggle_top_level(&id("Earth-Rite"));
        menu.open_submenu(&id("RTR"));
        assert!(menu.is_submenu_open(&id("RTR")));

        menu.toggle_top_level(&id("Cen-Stat"));
        assert!(menu.is_top_level_open(&id("Cen-Stat")));
        assert_eq!(menu.state().open_submenu(), None);
    }

    #[test]
    fn closing_top_level_cascades_to_submenu() {
        let mut menu = menu();
        menu.toggle_top_level(&id("Earth-Rite"));
        menu.open_submenu(&id("RTR"));

        menu.toggle_top_level(&id("Earth-Rite"));
        assert_eq!(menu.state(), &NavState::default());
    }

    #[test]
    fn submenu_requires_open_parent() {
        let mut menu = menu();
        let before = menu.state().clone();
        menu.open_submenu(&id("RTR"));
        assert_eq!(menu.state(), &before);

        // wrong parent
        menu.toggle_top_level(&id("Cen-Stat"));
        let before = menu.state().clone();
        menu.open_submenu(&id("RTR"));
        assert_eq!(menu.state(), &before);

        // plain links have no submenu
        menu.toggle_top_level(&id("Earth-Rite"));
        menu.open_submenu(&id("MGV"));
        assert_eq!(menu.state().open_submenu(), None);
    }

    #[test]
    fn close_submenu_keeps_parent_open() {
        let mut menu = menu();
        menu.toggle_top_level(&id("Earth-Rite"));
        menu.toggle_submenu(&id("RTR"));
        assert!(menu.is_submenu_open(&id("RTR")));

        menu.toggle_submenu(&id("RTR"));
        assert!(menu.is_top_level_open(&id("Earth-Rite")));
        assert_eq!(menu.state().open_submenu(), None);
    }

    #[test]
    fn disabled_links_and_unknown_items_are_no_ops() {
        let mut menu = menu();
        for label in ["Tester", "Home", "Nope"] {
            menu.toggle_top_level(&id(label));
            assert_eq!(menu.state(), &NavState::default());
        }
    }

    #[test]
    fn select_link_clears_everything() {
        let mut menu = menu();
        menu.toggle_mobile_menu();
        menu.toggle_top_level(&id("Earth-Rite"));
        menu.open_submenu(&id("RTR"));

        menu.select_link("/#specs");
        assert_eq!(menu.state(), &NavState::default());

        menu.select_link("/");
        assert_eq!(menu.state(), &NavState::default());
    }

    #[test]
    fn outside_interaction_closes_only_when_outside() {
        let mut menu = menu();
        menu.toggle_top_level(&id("Earth-Rite"));
        menu.open_submenu(&id("RTR"));
        let open = menu.state().clone();

        menu.handle_outside_interaction(PointerTarget::Inside);
        assert_eq!(menu.state(), &open);

        menu.handle_outside_interaction(PointerTarget::Outside);
        assert_eq!(menu.state(), &NavState::default());
    }

    #[test]
    fn mobile_menu_is_independent_of_dropdowns() {
        let mut menu = menu();
        menu.toggle_mobile_menu();
        assert!(menu.state().is_mobile_menu_open());
        assert_eq!(menu.state().open_top_level(), None);

        menu.toggle_top_level(&id("Earth-Rite"));
        menu.toggle_top_level(&id("Earth-Rite"));
        assert!(menu.state().is_mobile_menu_open());

        menu.toggle_mobile_menu();
        assert!(!menu.state().any_open());
    }

    #[test]
    fn escape_dismisses_all_menus() {
        let mut menu = menu();
        menu.toggle_mobile_menu();
        menu.toggle_top_level(&id("Cen-Stat"));
        menu.dismiss();
        assert_eq!(menu.state(), &NavState::default());
    }
}
