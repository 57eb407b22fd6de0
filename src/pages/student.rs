//! Student/parent dashboard landing page.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::state::auth::AuthState;

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.get()
            .user
            .map(|user| format!("Welcome back, {}", user.full_name))
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard-page">
            <PageHeader title="My Learning"/>
            <p class="dashboard-page__greeting">{greeting}</p>
            <div class="dashboard-page__cards">
                <div class="info-card">
                    <h3>"My Timetable"</h3>
                    <p>"Your upcoming lessons will appear here."</p>
                </div>
                <div class="info-card">
                    <h3>"Learning Results"</h3>
                    <p>"Scores and progress reports will appear here after each assessment."</p>
                </div>
            </div>
        </div>
    }
}
