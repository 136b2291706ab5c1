use leptos::logging::error;
use leptos::prelude::*;

use crate::components::{ScrollProgress, ScrollTopButton};
use crate::content::SiteContent;
use crate::models::Section;
use crate::sections::*;
use crate::state::ScrollTracker;

/// Body of a registered section, `None` for ids this page does not render
fn section_body(id: &str) -> Option<AnyView> {
    let body = match id {
        "hero" => view! { <Hero/> }.into_any(),
        "trustbar" => view! { <TrustBar/> }.into_any(),
        "problem" => view! { <ProblemSolution/> }.into_any(),
        "features" => view! { <TechnicalFeatures/> }.into_any(),
        "specs" => view! { <TechnicalSpecs/> }.into_any(),
        "accessoires" => view! { <Accessories/> }.into_any(),
        "cta" => view! { <CtaFooter/> }.into_any(),
        _ => return None,
    };
    Some(body)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let sections = expect_context::<SiteContent>().sections;
    let Some(tracker) = ScrollTracker::new(sections.clone()) else {
        error!("no page sections registered");
        return ().into_any();
    };
    let tracker = RwSignal::new(tracker);
    let progress = RwSignal::new(0.0);

    let active = Memo::new(move |_| tracker.with(|t| t.state().active_section().clone()));
    let show_scroll_top = Memo::new(move |_| tracker.with(|t| t.state().is_past_threshold()));

    #[cfg(feature = "hydrate")]
    track_scroll(tracker, progress);

    if cfg!(debug_assertions) {
        Effect::new(move |_| leptos::logging::log!("Active section: {}", active.get()));
    }

    view! {
        <ScrollProgress progress=progress/>
        <div class="home-page">
            {sections.into_iter().filter_map(section_view).collect_view()}
        </div>
        <ScrollTopButton visible=show_scroll_top/>
        {cfg!(debug_assertions).then(|| view! {
            <div class="section-indicator" aria-hidden="true">
                "Active: "
                <strong>{move || active.get().to_string()}</strong>
            </div>
        })}
    }
    .into_any()
}

fn section_view(section: Section) -> Option<impl IntoView> {
    let body = section_body(section.id.as_str())?;
    Some(view! {
        <section id=section.id.to_string() data-section="" aria-label=section.label>
            {body}
        </section>
    })
}

/// Recomputes the tracker after mount and at most once per animation frame
/// while the window scrolls.
#[cfg(feature = "hydrate")]
fn track_scroll(tracker: RwSignal<ScrollTracker>, progress: RwSignal<f64>) {
    use crate::browser::{self, DocumentProbe};
    use crate::state::scroll_progress;

    let refresh = move || {
        let metrics = browser::page_metrics();
        tracker.maybe_update(|t| {
            let tops = t.measure(&DocumentProbe);
            t.on_scroll(metrics.offset_y, &tops)
        });
        progress.set(scroll_progress(
            metrics.offset_y,
            metrics.scroll_height,
            metrics.viewport_height,
        ));
    };

    Effect::new(move |_| refresh());

    let frame_pending = StoredValue::new(false);
    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        if frame_pending.get_value() {
            return;
        }
        frame_pending.set_value(true);
        request_animation_frame(move || {
            frame_pending.set_value(false);
            refresh();
        });
    });
    on_cleanup(move || handle.remove());
}
