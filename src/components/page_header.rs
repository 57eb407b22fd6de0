//! Page title block shared by the admin screens.

use leptos::prelude::*;

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into, optional)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-header__title">{title}</h1>
            {subtitle.map(|s| view! { <p class="page-header__subtitle">{s}</p> })}
        </header>
    }
}
