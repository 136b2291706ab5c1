use leptos::prelude::*;

use crate::browser;
use crate::components::icons::{Chevron, Direction};

/// Thin bar pinned to the top of the viewport, `progress` in `[0, 1]`
#[component]
pub fn ScrollProgress(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    view! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", progress.get() * 100.0)
            style:transform=move || format!("scaleX({})", progress.get())
        ></div>
    }
}

#[component]
pub fn ScrollTopButton(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <button
                type="button"
                class="scroll-top fade-in-up"
                aria-label="Torna all'inizio della pagina"
                on:click=|_| browser::scroll_to_top()
            >
                <Chevron direction=Direction::Up/>
            </button>
        </Show>
    }
}
