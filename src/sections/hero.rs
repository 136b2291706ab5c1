use leptos::prelude::*;

use crate::browser;
use crate::components::icons::ShieldIcon;
use crate::content::SiteContent;

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("Certificato ATEX / IECEx / FM", "Zone 1, 2, 21, 22"),
    ("Monitoraggio continuo ≤10Ω", "Tecnologia Tri-Mode"),
    ("Installazione rapida", "Plug & Play"),
];

#[component]
pub fn Hero() -> impl IntoView {
    let datasheet = expect_context::<SiteContent>().links.datasheet;

    view! {
        <div class="hero container">
            <div class="hero-copy fade-in-up">
                <h1 class="hero-title">
                    <span>"Earth-Rite RTR"</span>
                    <span class="text-gradient">"Sistema ATEX"</span>
                    <span class="hero-title-sub">"di Nuova Generazione"</span>
                </h1>
                <p class="hero-subtitle">
                    "Messa a terra intelligente per autocisterne in ambienti esplosivi. "
                    <span class="muted">"Monitoraggio continuo e conformità certificata."</span>
                </p>

                <div class="hero-highlights">
                    {HIGHLIGHTS
                        .iter()
                        .map(|(text, sub)| view! {
                            <div class="hero-highlight">
                                <ShieldIcon/>
                                <div>
                                    <p class="hero-highlight-text">{*text}</p>
                                    <p class="hero-highlight-sub">{*sub}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>

                <div class="cta-buttons">
                    <button
                        type="button"
                        class="btn btn-primary btn-lg"
                        on:click=move |_| {
                            browser::scroll_to_anchor("cta");
                        }
                    >
                        "Consulenza Gratuita"
                    </button>
                    <button
                        type="button"
                        class="btn btn-outline btn-lg"
                        on:click=move |_| browser::open_external(&datasheet)
                    >
                        "Scheda Tecnica"
                    </button>
                </div>
            </div>

            <div class="hero-image fade-in">
                <img
                    src="/images/earth-rite-rtr-product.png"
                    alt="Sistema di messa a terra Earth-Rite RTR"
                    width="640"
                    height="640"
                />
            </div>
        </div>
    }
}
