//! Forgot-password request form.
//!
//! The backend answers success-shaped whether or not the address exists, so
//! the page always shows the same confirmation on success.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::form;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        email_error.set(form::email(&email_value).err());
        if email_error.get().is_some() {
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::auth::forgot_password(&email_value).await {
                Ok(_) => sent.set(true),
                Err(err) => error.set(Some(err.message)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"EduCenter"</h1>
                <p class="auth-card__subtitle">"Reset your password"</p>
                <Show
                    when=move || !sent.get()
                    fallback=|| {
                        view! {
                            <p class="auth-card__info">
                                "If an account exists for that address, a reset link is on its way."
                            </p>
                        }
                    }
                >
                    <Show when=move || error.get().is_some()>
                        <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__label">
                            "Email Address"
                            <input
                                class="auth-form__input"
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <Show when=move || email_error.get().is_some()>
                                <span class="auth-form__field-error">
                                    {move || email_error.get().unwrap_or_default()}
                                </span>
                            </Show>
                        </label>
                        <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Sending..." } else { "Send Reset Link" }}
                        </button>
                    </form>
                </Show>
                <div class="auth-card__links">
                    <A href="/login">"Back to sign in"</A>
                </div>
            </div>
        </div>
    }
}
