use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::browser;
use crate::components::icons::{Chevron, Direction, MailIcon, MenuIcon};
use crate::content::SiteContent;
use crate::models::{anchor_of, is_current_route, ItemId, NavEntry};
use crate::state::NavMenu;

const UNAVAILABLE: &str = "Pagina non disponibile";
const CONTACT_HREF: &str = "/#cta";
const MOBILE_MENU_ID: &str = "mobile-menu";

fn aria_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// `aria-current="page"` while the router is at `href`
fn aria_current(href: &str) -> impl Fn() -> Option<&'static str> + Send + Sync + 'static {
    let pathname = use_location().pathname;
    let href = href.to_string();
    move || pathname.with(|path| is_current_route(path, &href)).then_some("page")
}

/// Elements a pointer-down may land in without dismissing the menus: the
/// open desktop dropdown, the mobile panel and its toggle.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn is_menu_container(id: &str, class: &str) -> bool {
    let has = |name: &str| class.split_whitespace().any(|c| c == name);
    id == MOBILE_MENU_ID || has("mobile-toggle") || (has("nav-dropdown") && has("open"))
}

/// Clears menu state, then hands the click to the anchor scroll or the router
fn follow_link(ev: MouseEvent, menu: RwSignal<NavMenu>, href: &str) {
    menu.update(|m| m.select_link(href));
    if let Some(anchor) = anchor_of(href) {
        if browser::scroll_to_anchor(anchor) {
            ev.prevent_default();
        }
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let menu = RwSignal::new(NavMenu::new(content.navigation));

    #[cfg(feature = "hydrate")]
    dismiss_while_open(menu);

    let mobile_open = Memo::new(move |_| menu.with(|m| m.state().is_mobile_menu_open()));
    let entries = menu.with_untracked(|m| m.entries().to_vec());
    let mobile_entries = entries.clone();

    view! {
        <header class="site-header">
            <nav class="container main-nav" aria-label="Navigazione principale">
                <div class="nav-bar">
                    <A href="/" attr:class="nav-brand" attr:aria-label="Messa a Terra Ex - Home">
                        <img src="/images/logo.png" alt="Messa a Terra Ex Logo" width="48" height="48"/>
                        <span class="nav-brand-text">
                            <span class="nav-brand-kicker">"Messa a Terra Ex"</span>
                            <span class="nav-brand-name">"Earth-Rite"</span>
                        </span>
                    </A>

                    <ul class="nav-links desktop-only">
                        {entries
                            .into_iter()
                            .map(|entry| desktop_entry(entry, menu))
                            .collect_view()}
                    </ul>

                    <div class="desktop-only">
                        <a
                            href=CONTACT_HREF
                            class="btn btn-accent"
                            on:click=move |ev| follow_link(ev, menu, CONTACT_HREF)
                        >
                            <MailIcon/>
                            "Richiedi Info"
                        </a>
                    </div>

                    <button
                        type="button"
                        class="mobile-toggle mobile-only"
                        aria-controls=MOBILE_MENU_ID
                        aria-expanded=move || aria_bool(mobile_open.get())
                        aria-label={move || if mobile_open.get() { "Chiudi menu" } else { "Apri menu" }}
                        on:click=move |_| menu.update(NavMenu::toggle_mobile_menu)
                    >
                        {move || view! { <MenuIcon open=mobile_open.get()/> }}
                    </button>
                </div>

                <Show when=move || mobile_open.get()>
                    <div id=MOBILE_MENU_ID class="mobile-menu mobile-only">
                        <ul class="mobile-links">
                            {mobile_entries
                                .iter()
                                .cloned()
                                .map(|entry| mobile_entry(entry, menu))
                                .collect_view()}
                        </ul>
                        <div class="mobile-cta">
                            <a
                                href=CONTACT_HREF
                                class="btn btn-accent btn-block"
                                on:click=move |ev| follow_link(ev, menu, CONTACT_HREF)
                            >
                                <MailIcon/>
                                "Richiedi Informazioni"
                            </a>
                        </div>
                    </div>
                </Show>
            </nav>
        </header>
    }
}

fn disabled_entry(label: String, class: &'static str) -> AnyView {
    view! {
        <span class=class aria-disabled="true" title=UNAVAILABLE>
            {label}
        </span>
    }
    .into_any()
}

fn desktop_entry(entry: NavEntry, menu: RwSignal<NavMenu>) -> impl IntoView {
    let body = match entry {
        NavEntry::Disabled { label } => disabled_entry(label, "nav-item nav-item-disabled"),
        NavEntry::Link { label, href, .. } => {
            let target = href.clone();
            let current = aria_current(&href);
            view! {
                <a
                    class="nav-item"
                    href=href
                    aria-current=current
                    on:click=move |ev| follow_link(ev, menu, &target)
                >
                    {label}
                </a>
            }
            .into_any()
        }
        NavEntry::Dropdown { label, items, .. } => {
            let id = ItemId::new(label.clone());
            let open = {
                let id = id.clone();
                Memo::new(move |_| menu.with(|m| m.is_top_level_open(&id)))
            };
            view! {
                <div class="nav-dropdown" class:open=move || open.get()>
                    <button
                        type="button"
                        class="nav-item"
                        class:active=move || open.get()
                        aria-haspopup="true"
                        aria-expanded=move || aria_bool(open.get())
                        on:click=move |_| menu.update(|m| m.toggle_top_level(&id))
                    >
                        {label}
                        <Chevron direction=Direction::Down/>
                    </button>
                    <Show when=move || open.get()>
                        <div class="dropdown-panel fade-in-down">
                            {items
                                .iter()
                                .cloned()
                                .map(|item| dropdown_item(item, menu))
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            }
            .into_any()
        }
    };

    view! { <li class="nav-entry">{body}</li> }
}

fn dropdown_item(entry: NavEntry, menu: RwSignal<NavMenu>) -> AnyView {
    match entry {
        NavEntry::Disabled { label } => disabled_entry(label, "dropdown-link nav-item-disabled"),
        NavEntry::Link {
            label,
            href,
            description,
        } => {
            let target = href.clone();
            let current = aria_current(&href);
            view! {
                <a
                    class="dropdown-link"
                    href=href
                    aria-current=current
                    on:click=move |ev| follow_link(ev, menu, &target)
                >
                    <span class="dropdown-title">{label}</span>
                    {description.map(|d| view! { <span class="dropdown-description">{d}</span> })}
                </a>
            }
            .into_any()
        }
        NavEntry::Dropdown {
            label,
            href,
            description,
            heading,
            items,
        } => {
            let id = ItemId::new(label.clone());
            let open = {
                let id = id.clone();
                Memo::new(move |_| menu.with(|m| m.is_submenu_open(&id)))
            };
            let title = view! {
                <span class="dropdown-text">
                    <span class="dropdown-title">{label.clone()}</span>
                    {description.map(|d| view! { <span class="dropdown-description">{d}</span> })}
                </span>
                <Chevron direction=Direction::Right class="submenu-arrow"/>
            };
            let trigger = match href {
                Some(href) => {
                    let target = href.clone();
                    view! {
                        <a class="dropdown-link has-submenu" href=href on:click=move |ev| follow_link(ev, menu, &target)>
                            {title}
                        </a>
                    }
                    .into_any()
                }
                None => view! { <span class="dropdown-link has-submenu">{title}</span> }.into_any(),
            };

            view! {
                <div
                    class="submenu-host"
                    on:mouseenter=move |_| menu.update(|m| m.open_submenu(&id))
                    on:mouseleave=move |_| menu.update(NavMenu::close_submenu)
                >
                    {trigger}
                    <Show when=move || open.get()>
                        <div class="submenu-panel fade-in-left">
                            {heading.clone().map(|h| view! { <div class="submenu-heading">{h}</div> })}
                            {items
                                .iter()
                                .cloned()
                                .map(|item| submenu_link(item, menu, "submenu-link"))
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            }
            .into_any()
        }
    }
}

/// Leaf of the nested submenu. Content validation keeps dropdowns out of this level.
fn submenu_link(entry: NavEntry, menu: RwSignal<NavMenu>, class: &'static str) -> AnyView {
    match entry {
        NavEntry::Link { label, href, .. } => {
            let target = href.clone();
            let current = aria_current(&href);
            view! {
                <a class=class href=href aria-current=current on:click=move |ev| follow_link(ev, menu, &target)>
                    {label}
                </a>
            }
            .into_any()
        }
        other => disabled_entry(other.label().to_string(), "nav-item-disabled"),
    }
}

fn mobile_entry(entry: NavEntry, menu: RwSignal<NavMenu>) -> impl IntoView {
    let body = match entry {
        NavEntry::Disabled { label } => disabled_entry(label, "mobile-item nav-item-disabled"),
        NavEntry::Link { label, href, .. } => {
            let target = href.clone();
            let current = aria_current(&href);
            view! {
                <a
                    class="mobile-item"
                    href=href
                    aria-current=current
                    on:click=move |ev| follow_link(ev, menu, &target)
                >
                    {label}
                </a>
            }
            .into_any()
        }
        NavEntry::Dropdown { label, items, .. } => {
            let id = ItemId::new(label.clone());
            let open = {
                let id = id.clone();
                Memo::new(move |_| menu.with(|m| m.is_top_level_open(&id)))
            };
            view! {
                <div>
                    <button
                        type="button"
                        class="mobile-item mobile-dropdown"
                        class:active=move || open.get()
                        aria-expanded=move || aria_bool(open.get())
                        on:click=move |_| menu.update(|m| m.toggle_top_level(&id))
                    >
                        {label}
                        <Chevron direction=Direction::Down/>
                    </button>
                    <Show when=move || open.get()>
                        <div class="mobile-subitems">
                            {items
                                .iter()
                                .cloned()
                                .map(|item| mobile_subitem(item, menu))
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            }
            .into_any()
        }
    };

    view! { <li>{body}</li> }
}

fn mobile_subitem(entry: NavEntry, menu: RwSignal<NavMenu>) -> AnyView {
    match entry {
        NavEntry::Dropdown {
            label, href, items, ..
        } => {
            let id = ItemId::new(label.clone());
            let open = {
                let id = id.clone();
                Memo::new(move |_| menu.with(|m| m.is_submenu_open(&id)))
            };
            let target = href.clone().unwrap_or_default();
            view! {
                <div>
                    <div class="mobile-subitem-row">
                        <a
                            class="mobile-subitem mobile-subitem-primary"
                            href=href
                            on:click=move |ev| follow_link(ev, menu, &target)
                        >
                            {label.clone()}
                        </a>
                        <button
                            type="button"
                            class="mobile-submenu-toggle"
                            aria-label=format!("Sezioni {label}")
                            aria-expanded=move || aria_bool(open.get())
                            on:click=move |_| menu.update(|m| m.toggle_submenu(&id))
                        >
                            <Chevron direction=Direction::Right/>
                        </button>
                    </div>
                    <Show when=move || open.get()>
                        <div class="mobile-subitems nested">
                            {items
                                .iter()
                                .cloned()
                                .map(|item| submenu_link(item, menu, "mobile-subitem"))
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            }
            .into_any()
        }
        other => submenu_link(other, menu, "mobile-subitem"),
    }
}

/// Attaches the outside-click and Escape listeners while any menu is open and
/// detaches them when everything closes or the header unmounts.
#[cfg(feature = "hydrate")]
fn dismiss_while_open(menu: RwSignal<NavMenu>) {
    use leptos::{ev, web_sys};
    use wasm_bindgen::JsCast;

    use crate::state::PointerTarget;

    fn classify(target: Option<web_sys::EventTarget>) -> PointerTarget {
        let mut element = target.and_then(|t| t.dyn_into::<web_sys::Element>().ok());
        while let Some(el) = element {
            let class = el.get_attribute("class").unwrap_or_default();
            if is_menu_container(&el.id(), &class) {
                return PointerTarget::Inside;
            }
            element = el.parent_element();
        }
        PointerTarget::Outside
    }

    let listeners = StoredValue::new_local(Vec::<WindowListenerHandle>::new());

    let detach = move || {
        listeners.try_update_value(|handles| {
            for handle in handles.drain(..) {
                handle.remove();
            }
        });
    };

    Effect::new(move |_| {
        let open = menu.with(|m| m.state().any_open());
        let attached = listeners.with_value(|handles| !handles.is_empty());

        if open && !attached {
            let pointer = window_event_listener(ev::mousedown, move |ev| {
                if classify(ev.target()) == PointerTarget::Outside {
                    menu.update(|m| m.handle_outside_interaction(PointerTarget::Outside));
                }
            });
            let escape = window_event_listener(ev::keydown, move |ev| {
                if ev.key() == "Escape" {
                    menu.update(NavMenu::dismiss);
                }
            });
            listeners.set_value(vec![pointer, escape]);
        } else if !open && attached {
            detach();
        }
    });

    on_cleanup(detach);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_dropdown_and_mobile_menu_count_as_inside() {
        assert!(is_menu_container("", "nav-dropdown open"));
        assert!(is_menu_container(MOBILE_MENU_ID, "mobile-menu mobile-only"));
        assert!(is_menu_container("", "mobile-toggle mobile-only"));
    }

    #[test]
    fn rest_of_header_counts_as_outside() {
        assert!(!is_menu_container("", "nav-dropdown"));
        assert!(!is_menu_container("", "nav-brand"));
        assert!(!is_menu_container("", "nav-item nav-item-disabled"));
        assert!(!is_menu_container("", "container main-nav"));
        assert!(!is_menu_container("", "dropdown-panel opening"));
    }
}
