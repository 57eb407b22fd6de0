//! 404 fallback for unmatched routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1 class="status-page__code">"404"</h1>
            <h2>"Page Not Found"</h2>
            <p class="status-page__detail">"The page you are looking for does not exist or has moved."</p>
            <div class="status-page__actions">
                <A href="/" attr:class="btn btn--primary">"Go Home"</A>
            </div>
        </div>
    }
}
