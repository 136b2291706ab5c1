use leptos::logging::error;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::Header;
use crate::content::SiteContent;
use crate::pages::*;

const TITLE: &str = "Earth-Rite RTR | Sistema ATEX Premium per Sicurezza Industriale";
const MAIN_ID: &str = "main-content";
const DESCRIPTION: &str = "Sistema di messa a terra intelligente per ambienti ATEX. Protezione certificata con monitoraggio real-time, conformità garantita e installazione semplice. Richiedi consulenza gratuita.";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = match SiteContent::load() {
        Ok(site) => site,
        Err(e) => {
            error!("site content rejected: {e}");
            return view! {
                <Title text=TITLE/>
                <main class="content-error">
                    <h1>"Contenuto non disponibile"</h1>
                    <p>{e.to_string()}</p>
                </main>
            }
            .into_any();
        }
    };
    provide_context(site);

    view! {
        <Stylesheet id="leptos" href="/pkg/earthrite.css"/>
        <Title text=TITLE/>
        <Meta name="description" content=DESCRIPTION/>

        <Router>
            <SkipLink/>
            <Header/>
            <main id=MAIN_ID>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
    .into_any()
}

/// Keyboard shortcut past the navigation, visible only when focused
#[component]
fn SkipLink() -> impl IntoView {
    view! {
        <a class="skip-link" href=format!("#{MAIN_ID}")>
            "Vai al contenuto principale"
        </a>
    }
}

#[cfg(test)]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    #[test]
    fn skip_link_targets_main_content() {
        let html = Owner::new().with(|| view! { <SkipLink/> }.to_html());
        assert!(html.contains(r##"href="#main-content""##));
        assert!(html.contains("Vai al contenuto principale"));
    }
}
