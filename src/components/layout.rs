//! Authenticated app shell: header, role-filtered sidebar, content outlet.

use leptos::prelude::*;
use leptos_router::components::{Outlet, A};

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::nav::items_for_role;

/// Shell wrapped around every `/app/...` route. Reads the session, never
/// writes it; logout is the one explicit trigger.
#[component]
pub fn AppShell() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let identity = move || {
        auth.get()
            .user
            .map(|user| (user.full_name, user.role.label()))
            .unwrap_or_else(|| (String::new(), ""))
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        crate::state::session::spawn_logout(auth);
    };

    view! {
        <div class="app-shell">
            <aside class=move || {
                if ui.get().sidebar_collapsed { "app-shell__sidebar app-shell__sidebar--collapsed" } else { "app-shell__sidebar" }
            }>
                <div class="app-shell__brand">
                    <A href="/app">"EduCenter"</A>
                </div>
                <nav class="app-shell__nav">
                    {move || {
                        items_for_role(auth.get().role())
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <A href=item.path attr:class="app-shell__nav-link">
                                        {item.label}
                                    </A>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </nav>
            </aside>

            <div class="app-shell__main">
                <header class="app-shell__header">
                    <button
                        class="btn app-shell__sidebar-toggle"
                        on:click=move |_| ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed)
                        title="Toggle sidebar"
                    >
                        "\u{2261}"
                    </button>

                    <span class="app-shell__spacer"></span>

                    <button
                        class="btn app-shell__dark-toggle"
                        on:click=move |_| {
                            let current = ui.get().dark_mode;
                            let next = crate::util::dark_mode::toggle(current);
                            ui.update(|u| u.dark_mode = next);
                        }
                        title="Toggle dark mode"
                    >
                        {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{263e}" }}
                    </button>

                    <A href="/" attr:class="app-shell__profile-link">
                        {move || identity().0}
                        " ("
                        <span class="app-shell__role">{move || identity().1}</span>
                        ")"
                    </A>

                    <button class="btn app-shell__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>

                <main class="app-shell__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
