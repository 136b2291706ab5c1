use leptos::prelude::*;

const CERTIFICATIONS: [(&str, &str); 6] = [
    ("/images/atexex.png", "ATEX Ex Certification"),
    ("/images/ccc.png", "CCC Certification"),
    ("/images/csaus.png", "CSA US Certification"),
    ("/images/iesex.png", "IECEx Certification"),
    ("/images/inmetro.png", "INMETRO Certification"),
    ("/images/sil2.png", "SIL 2 Safety Integrity Level Certification"),
];

#[component]
pub fn TrustBar() -> impl IntoView {
    // rendered twice so the marquee loops without a gap
    let logos = CERTIFICATIONS.iter().chain(CERTIFICATIONS.iter());

    view! {
        <div class="trust-bar">
            <div class="container">
                <div class="section-header">
                    <p class="eyebrow">"Certificazioni Internazionali"</p>
                    <h2 class="trust-title">"Conformità ai più elevati standard di sicurezza industriale"</h2>
                    <p class="muted">"Certificato ATEX, IECEx e SIL 2 per operazioni sicure in ambienti pericolosi"</p>
                </div>
                <div class="marquee">
                    <div class="marquee-track">
                        {logos
                            .map(|(src, alt)| view! {
                                <div class="trust-logo">
                                    <img src=*src alt=*alt loading="lazy"/>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
