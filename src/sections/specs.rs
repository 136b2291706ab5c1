use leptos::logging::log;
use leptos::prelude::*;

use crate::browser;
use crate::components::icons::{Chevron, Direction, ShieldIcon};
use crate::content::SiteContent;
use crate::state::toggle_expanded;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Variant {
    Success,
    Info,
    Warning,
    Accent,
}

impl Variant {
    fn class(self) -> &'static str {
        match self {
            Variant::Success => "tone-success",
            Variant::Info => "tone-info",
            Variant::Warning => "tone-warning",
            Variant::Accent => "tone-accent",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
struct Picture {
    src: &'static str,
    alt: &'static str,
}

struct SpecRow {
    category: &'static str,
    subtitle: &'static str,
    variant: Variant,
    image: Option<Picture>,
    specs: &'static [(&'static str, &'static str)],
    certifications: &'static [&'static str],
}

const RELAY_RATING: &str = "2 x contatti commutazione potenziale zero • 250 V CA, 5 A, 500 VA max. resistivo • 30 V CC, 2 A, 60 W max. resistivo";

static SPEC_ROWS: [SpecRow; 5] = [
    SpecRow {
        category: "Versione Ex d (Zona 1 / 21)",
        subtitle: "Unità di monitoraggio - Involucro antideflagrazione alluminio",
        variant: Variant::Warning,
        image: Some(Picture {
            src: "/images/spec/VersioneExd(Zona1:21).png",
            alt: "Versione Ex d (Zona 1:21)",
        }),
        specs: &[
            ("Alimentazione", "110/120 V o 220/240 V CA, 50-60 Hz • 12 V o 24 V CC"),
            ("Potenza nominale", "10 watt"),
            ("Temperatura ambiente", "-40°C a +55°C"),
            ("Protezione ingresso", "IP 66"),
            ("Peso", "4,5 kg (netto)"),
            ("Materiale", "Alluminio pressofuso privo di rame"),
            ("Circuito di monitoraggio", "Intrinsecamente sicuro"),
            ("Monitoraggio resistenza circuito", "Nominale ≤ 10 ohm (± 10%)"),
            ("Potenza nominale contatto relè uscita", RELAY_RATING),
            ("Pressacavo", "7 x M20 (2 dotati di tappo di chiusura)"),
        ],
        certifications: &[
            "ATEX: II 2(1)GD Ex d[ia] IIC T6 Gb(Ga)",
            "IECEx: Ex d[ia] IIC T6 Gb(Ga)",
            "FM: Classe I, Div 1, Gruppi A-D",
        ],
    },
    SpecRow {
        category: "Versione Ex e (Zona 2 / 21)",
        subtitle: "Unità di monitoraggio - Involucro GRP",
        variant: Variant::Info,
        image: Some(Picture {
            src: "/images/spec/VersioneExe(Zona2:21).png",
            alt: "Versione Ex e (Zona 2:21)",
        }),
        specs: &[
            ("Alimentazione", "108/125 V o 216/250 V CA, 50-60 Hz • 12 V o 24 V CC"),
            ("Potenza nominale", "10 watt"),
            ("Temperatura ambiente", "-40°C a +55°C"),
            ("Protezione ingresso", "IP 66"),
            ("Peso", "2 kg (netto)"),
            ("Materiale", "GRP con carica di carbonio"),
            ("Circuito di monitoraggio", "Intrinsecamente sicuro"),
            ("Monitoraggio resistenza circuito", "Nominale ≤ 10 ohm (± 10%)"),
            ("Potenza nominale contatto relè uscita", RELAY_RATING),
            ("Pressacavo", "7 x M20 (2 dotati di tappo di chiusura)"),
        ],
        certifications: &[
            "ATEX: II 3(1)G Ex ec nC [ia] IIC T4 Gc(Ga)",
            "IECEx: Ex ec nC [ia] IIC T4 Gc(Ga)",
            "FM: Classe I, Div 2, Gruppi A-D",
        ],
    },
    SpecRow {
        category: "Scatola di Giunzione / Perno di Stivaggio",
        subtitle: "Junction Box con sistema di stivaggio pinza integrato",
        variant: Variant::Accent,
        image: Some(Picture {
            src: "/images/spec/Custodiadiderivazione:pernodistivaggio.png",
            alt: "Custodia di derivazione perno di stivaggio",
        }),
        specs: &[
            ("Materiale involucro", "GRP con carica di carbonio"),
            ("Morsetti", "Capacità conduttori 2 x 2.5 mm²"),
            ("Dispositivo di stivaggio", "Perno di stivaggio universale isolato in nylon"),
            ("Protezione ingresso", "IP 66"),
            ("Passacavo", "1 x 20 mm"),
            ("Collegamento cavo pinza", "Connettore rapido"),
        ],
        certifications: &[],
    },
    SpecRow {
        category: "Pinza di Messa a Terra",
        subtitle: "Pinza certificata ATEX con punte al carburo di tungsteno",
        variant: Variant::Success,
        image: Some(Picture {
            src: "/images/spec/Pinzadimessaaterra.png",
            alt: "Pinza di messa a terra",
        }),
        specs: &[
            ("Design della pinza", "Punte in carburo di tungsteno bipolari"),
            ("Corpo", "Acciaio inossidabile AISI 304"),
            ("Larghezza maniglie", "38 mm"),
            ("Apertura massima", "30 mm (versione standard)"),
            ("Peso", "~240 grammi"),
        ],
        certifications: &[
            "Ex II 1 GD T6 (EN 13463-1:2009)",
            "ATEX: Sira 02ATEX9381",
            "FM: 3046346",
            "IECEx: Ex h IIC T6 Ga • Ex h IIIC T85°C Da",
            "Ta: -40°C a +60°C",
            "IECEx EXV 20.0033",
        ],
    },
    SpecRow {
        category: "Cavo Spiralato",
        subtitle: "Cavo Hytrel® resistente e flessibile con conduttori in rame",
        variant: Variant::Info,
        image: None,
        specs: &[
            (
                "Guaina",
                "Cen-Stat Hytrel® blu (statico-dissipativa, resistente alle sostanze chimiche e alle abrasioni)",
            ),
            ("Conduttori", "2 x 1.00 mm² in rame"),
            ("Lunghezze disponibili", "3 m (10 ft) • 5 m (16 ft) • 10 m (32 ft) • 15 m (50 ft)"),
            (
                "Caratteristiche",
                "Additivi di protezione UV e dissipazione statica • Spiralato estensibile",
            ),
            ("Connessione", "Quick Connect entrambe le estremità"),
            ("Diametro cavo", "~7 mm"),
        ],
        certifications: &[],
    },
];

/// Specification accordion. One row open at a time, the first open initially.
#[component]
pub fn TechnicalSpecs() -> impl IntoView {
    let datasheet = expect_context::<SiteContent>().links.datasheet;
    let expanded = RwSignal::new(Some(0usize));
    let lightbox = RwSignal::new(None::<Picture>);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                lightbox.set(None);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="specs container">
            <div class="section-header">
                <h2>"Specifiche Tecniche Dettagliate"</h2>
                <p class="muted">
                    "Tutte le caratteristiche tecniche del sistema Earth-Rite RTR per "
                    "garantire la compatibilità con la tua applicazione ATEX"
                </p>
            </div>

            <div class="accordion">
                {SPEC_ROWS
                    .iter()
                    .enumerate()
                    .map(|(index, row)| spec_row(index, row, expanded, lightbox))
                    .collect_view()}
            </div>

            <div class="specs-download">
                <button
                    type="button"
                    class="btn btn-outline"
                    on:click=move |_| {
                        log!("Download technical spec PDF");
                        browser::open_external(&datasheet);
                    }
                >
                    "Scarica la scheda tecnica (PDF)"
                </button>
            </div>

            <Show when=move || lightbox.get().is_some()>
                <div class="lightbox" on:click=move |_| lightbox.set(None)>
                    <button
                        type="button"
                        class="lightbox-close"
                        aria-label="Chiudi immagine"
                        on:click=move |_| lightbox.set(None)
                    >
                        "×"
                    </button>
                    {move || lightbox.get().map(|picture| view! {
                        <figure class="lightbox-body" on:click=|ev| ev.stop_propagation()>
                            <img src=picture.src alt=picture.alt width="800" height="600"/>
                            <figcaption>{picture.alt}</figcaption>
                        </figure>
                    })}
                </div>
            </Show>
        </div>
    }
}

fn spec_row(
    index: usize,
    row: &'static SpecRow,
    expanded: RwSignal<Option<usize>>,
    lightbox: RwSignal<Option<Picture>>,
) -> impl IntoView {
    let is_open = move || expanded.get() == Some(index);
    let content_id = format!("spec-content-{index}");

    view! {
        <div class="accordion-row" class:open=is_open>
            <button
                type="button"
                class="accordion-header"
                aria-expanded={move || if is_open() { "true" } else { "false" }}
                aria-controls=content_id.clone()
                on:click=move |_| expanded.update(|current| *current = toggle_expanded(*current, index))
            >
                <span class=format!("accordion-icon {}", row.variant.class())>
                    <ShieldIcon/>
                </span>
                <span class="accordion-title">
                    <h3>{row.category}</h3>
                    <p class="muted">{row.subtitle}</p>
                </span>
                <Chevron direction=Direction::Down class="accordion-chevron"/>
            </button>

            <div id=content_id class="accordion-content" hidden=move || !is_open()>
                <div class="accordion-body" class:centered=row.image.is_none()>
                    {row.image.map(|picture| view! {
                        <button
                            type="button"
                            class="spec-image"
                            aria-label=format!("Ingrandisci {}", picture.alt)
                            on:click=move |_| lightbox.set(Some(picture))
                        >
                            <img src=picture.src alt=picture.alt loading="lazy"/>
                        </button>
                    })}
                    <div class="spec-details">
                        <table class="spec-table">
                            <tbody>
                                {row
                                    .specs
                                    .iter()
                                    .map(|(param, value)| view! {
                                        <tr>
                                            <td class="spec-param">{*param}</td>
                                            <td class="spec-value">{*value}</td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                        {(!row.certifications.is_empty()).then(|| view! {
                            <div class="certifications">
                                <h4>"Certificazioni"</h4>
                                <ul>
                                    {row
                                        .certifications
                                        .iter()
                                        .map(|cert| view! { <li>{*cert}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}
