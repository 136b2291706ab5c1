use leptos::prelude::*;

use crate::content::SiteContent;

/// Product presentation video
#[component]
pub fn TechnicalFeatures() -> impl IntoView {
    let video = expect_context::<SiteContent>().links.video;

    view! {
        <div class="features container">
            <div class="section-header">
                <h2>"Caratteristiche Tecniche Avanzate"</h2>
                <p class="muted">
                    "Scopri le funzionalità che rendono Earth-Rite RTR la scelta leader "
                    "per la sicurezza ATEX negli impianti industriali."
                </p>
            </div>
            <div class="video-frame">
                <iframe
                    src=video
                    allow="autoplay; fullscreen; picture-in-picture"
                    allowfullscreen
                    title="Earth-Rite RTR - Presentazione del prodotto"
                ></iframe>
            </div>
        </div>
    }
}
