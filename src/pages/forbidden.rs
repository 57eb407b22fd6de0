//! 403 page: authenticated but not permitted. Distinct from the login
//! redirect so a role mismatch never looks like a missing session.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ForbiddenPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1 class="status-page__code">"403"</h1>
            <h2>"Access Restricted"</h2>
            <p class="status-page__detail">
                "You do not have the necessary permissions to view this page. "
                "Please contact your administrator if you believe this is an error."
            </p>
            <div class="status-page__actions">
                <A href="/" attr:class="btn btn--primary">"Go to Dashboard"</A>
            </div>
        </div>
    }
}
