use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found container">
            <p class="not-found-code">"404"</p>
            <h1>"Pagina Non Trovata"</h1>
            <p class="muted">
                "La pagina che stai cercando non esiste o è stata spostata. "
                "Controlla l'URL o torna alla homepage."
            </p>
            <A href="/" attr:class="btn btn-primary">"Torna alla Homepage"</A>
        </div>
    }
}
