//! Neutral full-screen loading placeholder used by the route guards.

use leptos::prelude::*;

#[component]
pub fn FullScreenLoader() -> impl IntoView {
    view! {
        <div class="loader-screen" aria-busy="true">
            <div class="loader-screen__spinner"></div>
            <p class="loader-screen__label">"Loading..."</p>
        </div>
    }
}
