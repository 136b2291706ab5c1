use std::time::Duration;

use chrono::Datelike;
use leptos::logging::{error, log};
use leptos::prelude::*;
use serde::Serialize;

use crate::components::icons::MailIcon;
use crate::content::SiteContent;
use crate::models::{ContactRequest, NewsletterRequest};

const ADDRESS: &str = "Via dell'Artigianato, 9, 24046 Osio Sotto BG";
const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2783.5!2d9.606!3d45.62!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x4781514f0f0f0f0f%3A0x0!2sVia+dell'Artigianato%2C+9%2C+24046+Osio+Sotto+BG!5e0!3m2!1sit!2sit!4v1700000000000!5m2!1sit!2sit";
const LINKEDIN: &str = "https://www.linkedin.com/company/maffioletti-srl/";
const NEWSLETTER_RESET: Duration = Duration::from_secs(3);

const QUICK_LINKS: [&str; 5] = [
    "Prodotti",
    "Certificazioni",
    "Assistenza",
    "Privacy Policy",
    "Cookie Policy",
];

fn log_submission(kind: &str, payload: &impl Serialize) {
    match serde_json::to_string(payload) {
        Ok(json) => log!("{kind}: {json}"),
        Err(e) => error!("{kind}: could not serialize request: {e}"),
    }
}

/// "+39035505115" -> "+39 035 505115"
fn display_phone(phone: &str) -> String {
    match phone.strip_prefix("+39").and_then(|rest| rest.split_at_checked(3)) {
        Some((area, number)) if !number.is_empty() => format!("+39 {area} {number}"),
        _ => phone.to_string(),
    }
}

/// Final call to action with the contact form, followed by the site footer.
#[component]
pub fn CtaFooter() -> impl IntoView {
    let links = expect_context::<SiteContent>().links;

    view! {
        <div class="cta-footer">
            <div class="cta container">
                <div class="section-header">
                    <h2>"Migliora la Sicurezza del Tuo Impianto"</h2>
                    <p class="muted">
                        "Compila il modulo e un esperto ATEX ti contatterà per una consulenza personalizzata."
                    </p>
                </div>
                <ContactForm/>
            </div>

            <footer class="site-footer" role="contentinfo">
                <div class="footer-grid container">
                    <div class="footer-company">
                        <div class="footer-logos">
                            <img src="/images/Logo-Maffioletti.png" alt="Maffioletti S.r.l." loading="lazy"/>
                            <img src="/images/TerraLogo.png" alt="Earth-Rite RTR" loading="lazy"/>
                        </div>
                        <p>
                            "Distributore autorizzato di sistemi di messa a terra ATEX. "
                            "Sicurezza, innovazione e affidabilità per l'industria."
                        </p>
                        <NewsletterForm/>
                        <a class="social-link" href=LINKEDIN target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                            "LinkedIn"
                        </a>
                    </div>

                    <div class="footer-contacts">
                        <h4>"Contatti"</h4>
                        <ul>
                            <li>
                                <a href=format!("tel:{}", links.phone)>
                                    <span class="label">"Telefono"</span>
                                    {display_phone(&links.phone)}
                                </a>
                            </li>
                            <li>
                                <a href=format!("mailto:{}", links.email)>
                                    <span class="label">"Email"</span>
                                    {links.email.clone()}
                                </a>
                            </li>
                            <li>
                                <a href=links.maps.clone() target="_blank" rel="noopener noreferrer">
                                    <span class="label">"Sede"</span>
                                    {ADDRESS}
                                </a>
                            </li>
                        </ul>
                    </div>

                    <nav class="footer-links" aria-label="Menu secondario">
                        <h4>"Link Rapidi"</h4>
                        <ul>
                            {QUICK_LINKS
                                .iter()
                                .map(|label| view! { <li><a href="#">{*label}</a></li> })
                                .collect_view()}
                        </ul>
                    </nav>

                    <div class="footer-map">
                        <h4>"Dove Siamo"</h4>
                        <iframe
                            src=MAP_EMBED
                            title="Mappa sede Maffioletti S.r.l."
                            referrerpolicy="no-referrer-when-downgrade"
                        ></iframe>
                        <a href=links.maps target="_blank" rel="noopener noreferrer">"Apri in Maps"</a>
                    </div>
                </div>

                <div class="footer-bottom container">
                    <p>
                        {format!(
                            "© {} Maffioletti S.r.l., distributore autorizzato Earth-Rite RTR. Tutti i diritti riservati.",
                            chrono::Local::now().year(),
                        )}
                    </p>
                </div>
            </footer>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let request = RwSignal::new(ContactRequest::default());
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log_submission("Contact request", &request.get_untracked());
        submitted.set(true);
    };

    view! {
        <div class="contact-card">
            <Show
                when=move || !submitted.get()
                fallback=|| view! {
                    <div class="form-success">
                        <h3>"Richiesta Inviata!"</h3>
                        <p>"Ti contatteremo al più presto."</p>
                    </div>
                }
            >
                <form class="contact-form" aria-label="Modulo di contatto" on:submit=on_submit>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="cta-name">"Nome e Cognome *"</label>
                            <input
                                type="text"
                                id="cta-name"
                                name="name"
                                required
                                placeholder="Mario Rossi"
                                prop:value=move || request.with(|r| r.name.clone())
                                on:input=move |ev| request.update(|r| r.name = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="cta-email">"Email *"</label>
                            <input
                                type="email"
                                id="cta-email"
                                name="email"
                                required
                                placeholder="mario@azienda.it"
                                prop:value=move || request.with(|r| r.email.clone())
                                on:input=move |ev| request.update(|r| r.email = event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="cta-company">"Azienda"</label>
                            <input
                                type="text"
                                id="cta-company"
                                name="company"
                                placeholder="Nome azienda"
                                prop:value=move || request.with(|r| r.company.clone())
                                on:input=move |ev| request.update(|r| r.company = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="cta-phone">"Telefono"</label>
                            <input
                                type="tel"
                                id="cta-phone"
                                name="phone"
                                placeholder="+39 XXX XXX XXXX"
                                prop:value=move || request.with(|r| r.phone.clone())
                                on:input=move |ev| request.update(|r| r.phone = event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="cta-message">"Messaggio"</label>
                        <textarea
                            id="cta-message"
                            name="message"
                            rows="3"
                            placeholder="Come possiamo aiutarti?"
                            prop:value=move || request.with(|r| r.message.clone())
                            on:input=move |ev| request.update(|r| r.message = event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button type="submit" class="btn btn-primary btn-block">
                        "Invia Richiesta"
                    </button>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn NewsletterForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = NewsletterRequest {
            email: email.get_untracked(),
        };
        log_submission("Newsletter subscription", &request);
        submitted.set(true);
        set_timeout(
            move || {
                submitted.set(false);
                email.set(String::new());
            },
            NEWSLETTER_RESET,
        );
    };

    view! {
        <div class="newsletter">
            <h4>"Newsletter ATEX"</h4>
            <p class="muted">"Ricevi aggiornamenti su normative, prodotti e sicurezza industriale"</p>
            <Show
                when=move || !submitted.get()
                fallback=|| view! { <p class="form-success">"Iscrizione confermata!"</p> }
            >
                <form class="newsletter-form" on:submit=on_submit>
                    <input
                        type="email"
                        required
                        placeholder="La tua email"
                        aria-label="Email per newsletter"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary" aria-label="Iscriviti alla newsletter">
                        <MailIcon/>
                    </button>
                </form>
            </Show>
            <p class="fine-print">"Nessuno spam. Cancellati in qualsiasi momento."</p>
        </div>
    }
}
