//! Account registration. The flow may be disabled in a deployment; the
//! backend's rejection surfaces like any other submit error.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::util::form;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let field_errors = RwSignal::new([None::<String>, None, None, None]);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let full_name_value = full_name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        let errors = [
            form::required(&full_name_value).err(),
            form::email(&email_value).err(),
            form::password(&password_value).err(),
            form::confirm(&confirm.get(), &password_value).err(),
        ];
        let invalid = errors.iter().any(Option::is_some);
        field_errors.set(errors);
        if invalid {
            return;
        }
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::auth::register(&full_name_value, &email_value, &password_value).await {
                Ok(_) => navigate("/login", NavigateOptions::default()),
                Err(err) => {
                    error.set(Some(err.message));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (full_name_value, email_value, password_value, navigate);
            busy.set(false);
        }
    };

    let field_error = move |index: usize| {
        let errors = field_errors.get();
        errors[index].clone()
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"EduCenter"</h1>
                <p class="auth-card__subtitle">"Create an account"</p>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Full Name"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                        <Show when=move || field_error(0).is_some()>
                            <span class="auth-form__field-error">{move || field_error(0).unwrap_or_default()}</span>
                        </Show>
                    </label>
                    <label class="auth-form__label">
                        "Email Address"
                        <input
                            class="auth-form__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <Show when=move || field_error(1).is_some()>
                            <span class="auth-form__field-error">{move || field_error(1).unwrap_or_default()}</span>
                        </Show>
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <Show when=move || field_error(2).is_some()>
                            <span class="auth-form__field-error">{move || field_error(2).unwrap_or_default()}</span>
                        </Show>
                    </label>
                    <label class="auth-form__label">
                        "Confirm Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <Show when=move || field_error(3).is_some()>
                            <span class="auth-form__field-error">{move || field_error(3).unwrap_or_default()}</span>
                        </Show>
                    </label>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Sign Up" }}
                    </button>
                </form>
                <div class="auth-card__links">
                    <A href="/login">"Already have an account? Sign In"</A>
                </div>
            </div>
        </div>
    }
}
