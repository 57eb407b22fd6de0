//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::guard::{RequireAuth, RequireRole};
use crate::components::layout::AppShell;
use crate::components::loader::FullScreenLoader;
use crate::pages::admin::classes::ClassesPage;
use crate::pages::admin::overview::AdminOverviewPage;
use crate::pages::admin::rooms::RoomsPage;
use crate::pages::admin::students::StudentsPage;
use crate::pages::admin::teachers::TeachersPage;
use crate::pages::change_password::ChangePasswordPage;
use crate::pages::compliance::ComplianceDashboardPage;
use crate::pages::forbidden::ForbiddenPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::student::StudentDashboardPage;
use crate::pages::teacher::TeacherDashboardPage;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::{ADMIN_ROLES, COMPLIANCE_ROLES, STUDENT_ROLES, TEACHER_ROLES};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts, starts the session bootstrap, and
/// sets up client-side routing. The auth gate wraps every protected route;
/// role gates wrap each module subtree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
        crate::state::session::spawn_bootstrap(auth);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/classboard.css"/>
        <Title text="EduCenter Console"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                <Route path=StaticSegment("403") view=ForbiddenPage/>

                <ParentRoute path=StaticSegment("") view=RequireAuth>
                    <Route path=StaticSegment("") view=ProfilePage/>
                    <Route path=StaticSegment("change-password") view=ChangePasswordPage/>

                    <ParentRoute path=StaticSegment("app") view=AppShell>
                        <Route path=StaticSegment("") view=AppIndexPage/>

                        <ParentRoute
                            path=StaticSegment("admin")
                            view=|| view! { <RequireRole allow=ADMIN_ROLES/> }
                        >
                            <Route path=StaticSegment("") view=AdminOverviewPage/>
                            <Route path=StaticSegment("teachers") view=TeachersPage/>
                            <Route path=StaticSegment("students") view=StudentsPage/>
                            <Route path=StaticSegment("classes") view=ClassesPage/>
                            <Route path=StaticSegment("rooms") view=RoomsPage/>
                        </ParentRoute>

                        <ParentRoute
                            path=StaticSegment("teacher")
                            view=|| view! { <RequireRole allow=TEACHER_ROLES/> }
                        >
                            <Route path=StaticSegment("") view=TeacherDashboardPage/>
                        </ParentRoute>

                        <ParentRoute
                            path=StaticSegment("student")
                            view=|| view! { <RequireRole allow=STUDENT_ROLES/> }
                        >
                            <Route path=StaticSegment("") view=StudentDashboardPage/>
                        </ParentRoute>

                        <ParentRoute
                            path=StaticSegment("compliance")
                            view=|| view! { <RequireRole allow=COMPLIANCE_ROLES/> }
                        >
                            <Route path=StaticSegment("") view=ComplianceDashboardPage/>
                        </ParentRoute>
                    </ParentRoute>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// `/app` index: forward to the signed-in role's module home.
#[component]
fn AppIndexPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = crate::util::nav::module_home(state.role());
        navigate(target, NavigateOptions { replace: true, ..Default::default() });
    });

    view! { <FullScreenLoader/> }
}
