//! Compliance dashboard landing page.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;

#[component]
pub fn ComplianceDashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <PageHeader title="Compliance" subtitle="Content alerts and approval queues"/>
            <div class="dashboard-page__cards">
                <div class="info-card">
                    <h3>"Content Alerts"</h3>
                    <p>"No alerts at the moment."</p>
                </div>
                <div class="info-card">
                    <h3>"Approvals"</h3>
                    <p>"Pending approval requests will appear here."</p>
                </div>
            </div>
        </div>
    }
}
