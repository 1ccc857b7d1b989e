//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every declared route renders through [`Guarded`], which re-runs
//! `path_access` on each navigation. Pages never check the session to decide
//! whether they may render.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::{ParamSegment, StaticSegment};
use projectflow::{Access, AppRoute, path_access};

use crate::components::toaster::Toaster;
use crate::pages::{
    admin_panel::AdminPanelPage, dashboard::DashboardPage, login::LoginPage, project_detail::ProjectDetailPage,
    signup::SignupPage,
};
use crate::state::session::{BrowserStorage, ClientSession, api_config};
use crate::state::toast::ToastState;

/// Root application component.
///
/// Provides the API config, the session store and the toast queue, and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(api_config());
    provide_context(ClientSession::new(BrowserStorage));
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Title text="ProjectFlow"/>

        <Router>
            <Toaster/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=AppRoute::HOME.path()/> }/>
                <Route path=StaticSegment("signup") view=|| view! { <Guarded><SignupPage/></Guarded> }/>
                <Route path=StaticSegment("login") view=|| view! { <Guarded><LoginPage/></Guarded> }/>
                <Route path=StaticSegment("admin") view=|| view! { <Guarded><AdminPanelPage/></Guarded> }/>
                <Route path=StaticSegment("dashboard") view=|| view! { <Guarded><DashboardPage/></Guarded> }/>
                <Route
                    path=(StaticSegment("project"), ParamSegment("id"))
                    view=|| view! { <Guarded><ProjectDetailPage/></Guarded> }
                />
            </Routes>
        </Router>
    }
}

/// Renders `children` when the current route may be entered, otherwise
/// redirects to where the gate points.
#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<ClientSession>();
    let location = use_location();

    move || match path_access(&location.pathname.get(), session.is_authenticated()) {
        Access::Allow => children().into_any(),
        Access::Redirect(target) => view! { <Redirect path=target.path()/> }.into_any(),
    }
}
