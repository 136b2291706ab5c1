use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Right,
}

impl Direction {
    fn path(self) -> &'static str {
        match self {
            Direction::Up => "M5 15l7-7 7 7",
            Direction::Down => "M19 9l-7 7-7-7",
            Direction::Right => "M9 5l7 7-7 7",
        }
    }
}

#[component]
pub fn Chevron(
    direction: Direction,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <svg class=format!("icon {class}") fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=direction.path()/>
        </svg>
    }
}

#[component]
pub fn MenuIcon(open: bool) -> impl IntoView {
    let d = if open { "M6 18L18 6M6 6l12 12" } else { "M4 6h16M4 12h16M4 18h16" };
    view! {
        <svg class="icon icon-lg" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=d/>
        </svg>
    }
}

#[component]
pub fn MailIcon() -> impl IntoView {
    view! {
        <svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"
            />
        </svg>
    }
}

#[component]
pub fn ShieldIcon() -> impl IntoView {
    view! {
        <svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.040A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z"
            />
        </svg>
    }
}
