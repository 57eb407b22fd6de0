//! Profile page, the authenticated landing route.
//!
//! Shows the signed-in account and offers a fresh profile fetch; the
//! refreshed user replaces the cached one wholesale.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::page_header::PageHeader;
use crate::state::auth::AuthState;
use crate::util::nav::items_for_role;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let refreshing = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_refresh = move |_| {
        if refreshing.get() {
            return;
        }
        refreshing.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(token) = auth.get_untracked().access_token else {
                refreshing.set(false);
                return;
            };
            match crate::net::auth::me(&token).await {
                Ok(user) => {
                    auth.update(|state| {
                        crate::state::session::commit_user(
                            state,
                            &mut crate::util::token_store::BrowserTokenStore,
                            user,
                        );
                    });
                }
                Err(err) => {
                    crate::state::session::handle_api_error(auth, &err);
                    error.set(Some(err.message));
                }
            }
            refreshing.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        refreshing.set(false);
    };

    let field = |label: &'static str, value: String| {
        view! {
            <div class="profile-card__row">
                <span class="profile-card__key">{label}</span>
                <span class="profile-card__value">{value}</span>
            </div>
        }
    };

    view! {
        <div class="profile-page">
            <PageHeader title="My Profile"/>
            <Show when=move || error.get().is_some()>
                <p class="profile-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                auth.get()
                    .user
                    .map(|user| {
                        view! {
                            <div class="profile-card">
                                {field("Name", user.full_name.clone())}
                                {field("Email", user.email.clone())}
                                {field("Code", user.code.clone().unwrap_or_else(|| "-".to_owned()))}
                                {field("Role", user.role.label().to_owned())}
                                {field("Status", if user.is_active { "Active".to_owned() } else { "Inactive".to_owned() })}
                            </div>
                        }
                    })
            }}
            <div class="profile-page__actions">
                <button class="btn" on:click=on_refresh disabled=move || refreshing.get()>
                    {move || if refreshing.get() { "Refreshing..." } else { "Refresh Profile" }}
                </button>
                <A href="/change-password" attr:class="btn">
                    "Change Password"
                </A>
            </div>
            <div class="profile-page__modules">
                <h2>"My Modules"</h2>
                <ul>
                    {move || {
                        items_for_role(auth.get().role())
                            .into_iter()
                            .map(|item| view! { <li><A href=item.path>{item.label}</A></li> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </div>
        </div>
    }
}
