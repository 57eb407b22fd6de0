//! Change-password form for the signed-in account.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::page_header::PageHeader;
use crate::state::auth::AuthState;
use crate::util::form;

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let old_error = RwSignal::new(None::<String>);
    let new_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let old_value = old_password.get();
        let new_value = new_password.get();
        old_error.set(form::required(&old_value).err());
        new_error.set(form::password(&new_value).err());
        confirm_error.set(form::confirm(&confirm.get(), &new_value).err());
        if old_error.get().is_some() || new_error.get().is_some() || confirm_error.get().is_some() {
            return;
        }
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(token) = auth.get_untracked().access_token else {
                busy.set(false);
                return;
            };
            match crate::net::auth::change_password(&token, &old_value, &new_value).await {
                Ok(_) => navigate("/", NavigateOptions::default()),
                Err(err) => {
                    crate::state::session::handle_api_error(auth, &err);
                    error.set(Some(err.message));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (old_value, new_value, navigate, auth);
            busy.set(false);
        }
    };

    view! {
        <div class="form-page">
            <PageHeader
                title="Change Password"
                subtitle="Rotate your password regularly to keep your account safe"
            />
            <Show when=move || error.get().is_some()>
                <p class="form-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <form class="auth-form form-page__form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Current Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || old_password.get()
                        on:input=move |ev| old_password.set(event_target_value(&ev))
                    />
                    <Show when=move || old_error.get().is_some()>
                        <span class="auth-form__field-error">{move || old_error.get().unwrap_or_default()}</span>
                    </Show>
                </label>
                <label class="auth-form__label">
                    "New Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <Show when=move || new_error.get().is_some()>
                        <span class="auth-form__field-error">{move || new_error.get().unwrap_or_default()}</span>
                    </Show>
                </label>
                <label class="auth-form__label">
                    "Confirm New Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <Show when=move || confirm_error.get().is_some()>
                        <span class="auth-form__field-error">{move || confirm_error.get().unwrap_or_default()}</span>
                    </Show>
                </label>
                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Change Password" }}
                </button>
            </form>
        </div>
    }
}
