use leptos::prelude::*;

struct Item {
    name: &'static str,
    description: &'static str,
    image: &'static str,
    specs: &'static [&'static str],
}

struct Category {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    items: &'static [Item],
}

/// Specs shown per card
const SPECS_PREVIEW: usize = 3;

static CATEGORIES: [Category; 11] = [
    Category {
        id: "main-units",
        name: "Unità Principale",
        description: "Sistemi di monitoraggio certificati ATEX in diverse configurazioni",
        items: &[
            Item {
                name: "Versione Ex-d – Alluminio Pressofuso",
                description: "Involucro antideflagrazione in alluminio per Zone 1, certificazione ATEX/IECEx",
                image: "/images/accessories/VersioneEx-d – Alluminio Pressofuso.png",
                specs: &[
                    "Materiale: Alluminio pressofuso privo di rame",
                    "Certificazione: Ex d[ia] IIC T6 Gb(Ga)",
                    "Peso: 4.5 kg (netto)",
                    "Protezione ingresso: IP 66",
                    "Temperatura: -40°C a +55°C",
                ],
            },
            Item {
                name: "Versione Ex-e – GRP",
                description: "Involucro in GRP con carica di carbonio per Zone 2, soluzione leggera",
                image: "/images/accessories/Versione Ex-e – GRP.png",
                specs: &[
                    "Materiale: GRP con carica di carbonio",
                    "Certificazione: Ex ec nC [ia] IIC T4 Gc(Ga)",
                    "Peso: 2 kg (netto)",
                    "Protezione ingresso: IP 66",
                    "Temperatura: -40°C a +55°C",
                ],
            },
            Item {
                name: "JB e Perno di Stivaggio Pinza",
                description: "Sistema integrato di stivaggio per pinza di messa a terra",
                image: "/images/accessories/JBePernodiStivaggioPinza.png",
                specs: &[
                    "Perno di stivaggio universale isolato",
                    "Connettore rapido per cavo pinza",
                    "Materiale nylon resistente",
                    "Montaggio a parete",
                ],
            },
        ],
    },
    Category {
        id: "grounding-clamps",
        name: "Pinze di Terra",
        description: "Pinze certificate ATEX in acciaio inox con punte al carburo di tungsteno",
        items: &[
            Item {
                name: "Pinza Grande ATEX (30 mm)",
                description: "Pinza heavy-duty per superfici ampie, apertura massima 38mm",
                image: "/images/accessories/PinzaGrandeATEX.png",
                specs: &[
                    "Corpo: Acciaio Inox (AISI 304)",
                    "2 punte al carburo di tungsteno bipolari",
                    "Larghezza maniglie: 38 mm",
                    "Apertura massima: 30 mm",
                    "Certificazione: Ex h IIC T6 Ga",
                ],
            },
            Item {
                name: "Pinza Piccola ATEX (15 mm)",
                description: "Pinza compatta per spazi ridotti e superfici più piccole",
                image: "/images/accessories/PinzaPiccolaAtex.png",
                specs: &[
                    "Corpo: Acciaio Inox (AISI 304)",
                    "2 punte al carburo di tungsteno",
                    "Apertura massima: 15 mm",
                    "Design compatto",
                    "Certificazione: Ex h IIC T6 Ga",
                ],
            },
        ],
    },
    Category {
        id: "cables",
        name: "Cavi",
        description: "Cavi spiralati certificati con guaina Hytrel® resistente",
        items: &[Item {
            name: "Cavo Hytrel (3, 5, 10 e 15 mt)",
            description: "Cavo spiralato a 2 conduttori con rivestimento Hytrel® statico-dissipativo",
            image: "/images/accessories/CavoHytrel.png",
            specs: &[
                "Lunghezze disponibili: 3m, 5m, 10m, 15m",
                "Conduttori: 2 x 1.00 mm² in rame",
                "Guaina: Cen-Stat Hytrel blu",
                "Resistente a sostanze chimiche e abrasioni",
                "Additivi protezione UV e dissipazione statica",
            ],
        }],
    },
    Category {
        id: "cable-reel",
        name: "Avvolgicavo",
        description: "Sistema di riavvolgimento automatico certificato ATEX",
        items: &[Item {
            name: "Avvolgicavo ATEX (15 mt)",
            description: "Rullo per cavo retrattile con riavvolgimento automatico",
            image: "/images/accessories/Avvolgicavo.png",
            specs: &[
                "Lunghezza cavo: 15 metri",
                "Riavvolgimento automatico",
                "Anelli di contatto placcati in argento",
                "Bassissima resistenza",
                "Certificazione: ATEX II 2 GD T6",
            ],
        }],
    },
    Category {
        id: "strain-relief",
        name: "Antistrappo",
        description: "Connettori di protezione per cavi e collegamenti",
        items: &[Item {
            name: "Connettore Antistrappo",
            description: "Connettore rapido per collegamento sicuro e veloce della pinza",
            image: "/images/accessories/Antistrappo.png",
            specs: &[
                "Connessione rapida",
                "Protezione antistrappo",
                "Contatti placcati",
                "Resistente all'usura",
            ],
        }],
    },
    Category {
        id: "installation-kits",
        name: "Kit Installazione",
        description: "Kit completi di pressacavi certificati Ex per diverse configurazioni",
        items: &[
            Item {
                name: "Kit per Cavi Armati",
                description: "Kit A - Pressacavi Ex(d) IP68 per cavo armato da 9 a 13.5 mm Ø",
                image: "/images/accessories/kitA.png",
                specs: &[
                    "2x Pressacavi Ex(d) IP68 per cavo armato (9-13.5mm Ø)",
                    "3x Pressacavi Ex(d) IP68 per cavo non armato (4-8.4mm Ø)",
                    "3m cavo conduttore bipolare",
                    "2x 1m cavo verde circuito di terra",
                    "Connettori PCB e occhielli 10mm pre-montati",
                ],
            },
            Item {
                name: "Kit per Cavi Non Armati",
                description: "Kit B - Pressacavi Ex(d) IP68 per cavi non armati",
                image: "/images/accessories/kitB.png",
                specs: &[
                    "5x Pressacavi Ex(d) IP68 per cavo non armato (4-8.4mm Ø)",
                    "3m cavo conduttore bipolare",
                    "2x 1m cavo verde circuito di terra",
                    "Connettori PCB e occhielli pre-montati",
                    "Pressacavo plastica IP68 per scatola giunzione",
                ],
            },
            Item {
                name: "Kit per Versione GRP",
                description: "Kit C - Pressacavi Ex(e) IP68 per installazioni GRP",
                image: "/images/accessories/kitC.png",
                specs: &[
                    "5x Pressacavi Ex(e) IP68 per cavo non armato (6-13mm Ø)",
                    "3m cavo conduttore bipolare",
                    "2x 1m cavo verde circuito di terra",
                    "Ottimizzato per involucri GRP",
                    "Connettori e terminali inclusi",
                ],
            },
        ],
    },
    Category {
        id: "tester",
        name: "Tester",
        description: "Strumenti di test per installazione e manutenzione",
        items: &[Item {
            name: "Tester Installazione e Manutenzione",
            description: "Tester di capacitanza e resistenza (CRT) per verifica funzionamento sistema",
            image: "/images/accessories/TesterInstallazioneeManutenzione.png",
            specs: &[
                "Verifica capacitanza e resistenza",
                "Indicazione PASS/FAIL semplice",
                "Necessario per messa in servizio",
                "Controlli manutenzione periodica",
                "Caratteristiche elettriche autocisterna simulate",
            ],
        }],
    },
    Category {
        id: "switch-si",
        name: "Switch S.I.",
        description: "Switching a sicurezza intrinseca per circuiti certificati",
        items: &[Item {
            name: "PCB Contatti a Sicurezza Intrinseca",
            description: "Scheda per interfacciamento diretto con circuiti a sicurezza intrinseca",
            image: "/images/accessories/PCBContattiaSicurezzaIntrinseca.png",
            specs: &[
                "30V DC, 500 mA",
                "Li = 0H, Ci = 0F",
                "Compatibile NAMUR",
                "Adatto circuiti Ex ia, ib, ic",
                "Nessun impatto parametri elettrici",
            ],
        }],
    },
    Category {
        id: "selector",
        name: "Selettore",
        description: "Selettore per esclusione controllo capacità",
        items: &[Item {
            name: "Esclusione Controllo Capacità",
            description: "Selettore per bypassare il controllo di capacitanza in applicazioni specifiche",
            image: "/images/accessories/EsclusioneControlloCapacità.png",
            specs: &[
                "Bypass controllo capacitanza",
                "Uso in applicazioni speciali",
                "Mantenimento monitoraggio resistenza",
                "Installazione semplice",
            ],
        }],
    },
    Category {
        id: "strobe-light",
        name: "Lampeggiante",
        description: "Segnalazione visiva certificata ATEX per stato messa a terra",
        items: &[Item {
            name: "Lampeggiante ATEX",
            description: "Lampeggiante stroboscopico certificato per segnalazione stato messa a terra",
            image: "/images/accessories/LampeggianteAtex.png",
            specs: &[
                "Opzioni: 115V/230V AC e 24V DC",
                "Certificazione: Ex d IIC T4/T5",
                "Temperatura: -50°C a +70°C",
                "Montaggio in posizione elevata",
                "Segnalazione visiva chiara",
            ],
        }],
    },
    Category {
        id: "sun-shield",
        name: "Parasole",
        description: "Protezione per indicatori LED esposti a luce solare intensa",
        items: &[Item {
            name: "Schermo Parasole",
            description: "Schermo in acciaio inox per protezione indicatori LED dalla luce solare",
            image: "/images/accessories/SchermoParasole.png",
            specs: &[
                "Acciaio inossidabile resistente",
                "Installazione rapida (pochi minuti)",
                "Proietta ombra sugli indicatori",
                "Garantisce visibilità LED",
                "Compatibile tutte installazioni",
            ],
        }],
    },
];

fn category(id: &str) -> &'static Category {
    CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .unwrap_or(&CATEGORIES[0])
}

/// Tabbed catalog of components and accessories
#[component]
pub fn Accessories() -> impl IntoView {
    let active = RwSignal::new(CATEGORIES[0].id);

    view! {
        <div class="accessories container">
            <div class="section-header">
                <h2>"Componenti Principali e Accessori"</h2>
                <p class="muted">
                    "Configurazione modulare con componenti certificati ATEX per ogni esigenza applicativa"
                </p>
            </div>

            <div class="tabs" role="tablist">
                {CATEGORIES
                    .iter()
                    .map(|cat| {
                        let selected = move || active.get() == cat.id;
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class="tab"
                                class:active=selected
                                aria-selected={move || if selected() { "true" } else { "false" }}
                                aria-label=format!("Mostra {}", cat.name)
                                on:click=move |_| active.set(cat.id)
                            >
                                {cat.name}
                                {(cat.items.len() > 1).then(|| view! {
                                    <span class="tab-count">{cat.items.len()}</span>
                                })}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                let cat = category(active.get());
                view! {
                    <div class="tab-panel fade-in-up" role="tabpanel">
                        <p class="tab-description">{cat.description}</p>
                        <div class="card-grid">
                            {cat.items.iter().map(item_card).collect_view()}
                        </div>
                    </div>
                }
            }}
        </div>
    }
}

fn item_card(item: &'static Item) -> impl IntoView {
    view! {
        <article class="card">
            <div class="card-image">
                <img src=item.image alt=item.name loading="lazy"/>
            </div>
            <div class="card-body">
                <h3>{item.name}</h3>
                <p class="muted">{item.description}</p>
                <p class="card-specs-title">"Specifiche Tecniche:"</p>
                <ul class="card-specs">
                    {item
                        .specs
                        .iter()
                        .take(SPECS_PREVIEW)
                        .map(|spec| view! { <li>{*spec}</li> })
                        .collect_view()}
                </ul>
            </div>
        </article>
    }
}
