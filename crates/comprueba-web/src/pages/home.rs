use leptos::prelude::*;

use crate::config::CONFIG;
use crate::handler::{BUTTON_ID, MESSAGE_ID};

#[component]
pub fn HomePage() -> impl IntoView {
    // Wire the click listener once the hydrated DOM is in place.
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let Err(err) = crate::dom::wire() {
            web_sys::console::error_1(&format!("inicialización fallida: {err}").into());
        }
    });

    view! {
        <main class="page">
            <header>
                <h1>{CONFIG.name}</h1>
                <p class="tagline">{CONFIG.tagline}</p>
            </header>

            <button id=BUTTON_ID type="button">
                {CONFIG.button_label}
            </button>

            // Revealed (and restyled) by the click handler; never hidden again.
            <div id=MESSAGE_ID style="display: none;"></div>
        </main>
    }
}
