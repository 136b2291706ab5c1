use leptos::prelude::*;

#[component]
pub fn ProblemSolution() -> impl IntoView {
    view! {
        <div class="problem-solution container">
            <div class="split">
                <div class="split-copy">
                    <span class="badge badge-warning">"Il Problema"</span>
                    <h2>"Il rischio invisibile: " <span class="text-danger">"l'elettricità statica"</span></h2>
                    <p>
                        "Durante il trasferimento di liquidi infiammabili, le autocisterne possono accumulare "
                        "cariche elettrostatiche pericolose. Questo accumulo invisibile può generare scintille "
                        "in grado di innescare esplosioni in aree ATEX, mettendo a rischio persone e strutture."
                    </p>
                    <div class="note">
                        <span class="note-title">"Normative di riferimento"</span>
                        <p>"IEC TS 60079-32-1 / NFPA 77 / API RP 2003"</p>
                    </div>
                </div>
                <figure class="split-figure">
                    <img src="/images/citerne.png" alt="Autocisterna per trasporto liquidi infiammabili" loading="lazy"/>
                    <figcaption>"Accumulo elettrostatico su autocisterna"</figcaption>
                </figure>
            </div>

            <div class="split reverse">
                <figure class="split-figure">
                    <img src="/images/mass.png" alt="Sistema di messa a terra Earth-Rite II RTR" loading="lazy"/>
                    <figcaption>
                        "Quando la resistenza scende sotto i 10 Ohm, il sistema segnala lo stato di sicurezza attivo"
                    </figcaption>
                </figure>
                <div class="split-copy">
                    <span class="badge badge-success">"La Soluzione"</span>
                    <h2>"Controllo " <span class="text-info">"intelligente"</span> " e certificato"</h2>
                    <p>
                        "Earth-Rite II RTR è il sistema di messa a terra certificato che garantisce la sicurezza "
                        "durante le operazioni di trasferimento. Grazie alla tecnologia Tri-Mode, il sistema "
                        "monitora continuamente la resistenza di collegamento e segnala immediatamente qualsiasi "
                        "situazione di rischio."
                    </p>
                </div>
            </div>
        </div>
    }
}
