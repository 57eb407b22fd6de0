//! Teacher dashboard landing page.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::state::auth::AuthState;

#[component]
pub fn TeacherDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.get()
            .user
            .map(|user| format!("Welcome back, {}", user.full_name))
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard-page">
            <PageHeader title="Teacher Dashboard"/>
            <p class="dashboard-page__greeting">{greeting}</p>
            <div class="dashboard-page__cards">
                <div class="info-card">
                    <h3>"My Schedule"</h3>
                    <p>"Class schedules will appear here once the term plan is published."</p>
                </div>
                <div class="info-card">
                    <h3>"Attendance"</h3>
                    <p>"Open a class from your schedule to record attendance."</p>
                </div>
            </div>
        </div>
    }
}
