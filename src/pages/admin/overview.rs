//! Admin overview: headline counts for the managed resources.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::page_header::PageHeader;
use crate::net::admin::ListParams;
use crate::state::auth::AuthState;

#[component]
pub fn AdminOverviewPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let teacher_count = RwSignal::new(None::<u64>);
    let student_count = RwSignal::new(None::<u64>);
    let class_count = RwSignal::new(None::<u64>);
    let room_count = RwSignal::new(None::<u64>);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let token = auth.get_untracked().access_token;
            let params = ListParams { limit: 1, ..Default::default() };
            match crate::net::admin::list_teachers(token.as_deref(), &params).await {
                Ok(list) => teacher_count.set(Some(list.pagination.total_items)),
                Err(err) => crate::state::session::handle_api_error(auth, &err),
            }
            match crate::net::admin::list_students(token.as_deref(), &params).await {
                Ok(list) => student_count.set(Some(list.pagination.total_items)),
                Err(err) => crate::state::session::handle_api_error(auth, &err),
            }
            match crate::net::admin::list_classes(token.as_deref(), &params).await {
                Ok(list) => class_count.set(Some(list.pagination.total_items)),
                Err(err) => crate::state::session::handle_api_error(auth, &err),
            }
            match crate::net::admin::list_rooms(token.as_deref(), &params).await {
                Ok(list) => room_count.set(Some(list.pagination.total_items)),
                Err(err) => crate::state::session::handle_api_error(auth, &err),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }

    let tile = |label: &'static str, href: &'static str, count: RwSignal<Option<u64>>| {
        view! {
            <A href=href attr:class="stat-tile">
                <span class="stat-tile__count">
                    {move || count.get().map_or_else(|| "-".to_owned(), |n| n.to_string())}
                </span>
                <span class="stat-tile__label">{label}</span>
            </A>
        }
    };

    view! {
        <div class="overview-page">
            <PageHeader title="Admin Overview" subtitle="Center-wide headcounts and quick links"/>
            <div class="overview-page__tiles">
                {tile("Teachers", "/app/admin/teachers", teacher_count)}
                {tile("Students", "/app/admin/students", student_count)}
                {tile("Classes", "/app/admin/classes", class_count)}
                {tile("Rooms", "/app/admin/rooms", room_count)}
            </div>
        </div>
    }
}
