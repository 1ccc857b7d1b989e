//! Admin panel: verification stats, pending projects and the full list.
//!
//! Reachable by any authenticated user; the verify call itself is refused by
//! the backend for non-admins and surfaces as a failure toast.

use leptos::prelude::*;
use leptos_router::components::A;
use projectflow::AppRoute;
use projectflow::net::types::{Profile, ProjectId};
use projectflow::notice::{Operation, load_failures};
use projectflow::state::projects::ProjectList;

use super::PageHandles;
use crate::components::project_card::ProjectCard;

#[component]
pub fn AdminPanelPage() -> impl IntoView {
    let page = PageHandles::new();

    let profile = RwSignal::new(None::<Profile>);
    let projects = RwSignal::new(ProjectList::default());

    let gateway = page.gateway();
    leptos::task::spawn_local(async move {
        let (profile_result, projects_result) = futures::join!(gateway.profile(), gateway.list_projects());
        for (operation, error) in load_failures(&profile_result, &projects_result) {
            page.fail(operation, error);
        }
        if let Ok(items) = projects_result {
            projects.set(ProjectList::new(items));
        }
        if let Ok(p) = profile_result {
            profile.set(Some(p));
        }
    });

    let on_verify = Callback::new(move |id: ProjectId| {
        let gateway = page.gateway();
        leptos::task::spawn_local(async move {
            if page.finish(Operation::VerifyProject, gateway.verify_project(id).await).is_some() {
                projects.update(|list| {
                    list.mark_verified(id);
                });
            }
        });
    });

    let stats = move || projects.with(ProjectList::stats);

    view! {
        <Show when=move || profile.get().is_some()>
            <div class="admin-page">
                <header class="admin-page__header toolbar">
                    <A href=AppRoute::Dashboard.path() attr:class="btn">
                        "← Back to Dashboard"
                    </A>
                    <span class="toolbar__title">"Admin Panel"</span>
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__self">{move || profile.get().map(|p| p.username).unwrap_or_default()}</span>
                </header>

                <div class="admin-page__stats">
                    <div class="stat-card">
                        <span class="stat-card__label">"Total Projects"</span>
                        <span class="stat-card__value">{move || stats().total}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Verified"</span>
                        <span class="stat-card__value">{move || stats().verified}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Pending Verification"</span>
                        <span class="stat-card__value">{move || stats().pending}</span>
                    </div>
                </div>

                <section class="admin-page__section">
                    <h2>"Pending Verification"</h2>
                    {move || {
                        let pending: Vec<_> = projects.with(|list| list.pending().into_iter().cloned().collect());
                        if pending.is_empty() {
                            view! { <p class="admin-page__empty">"All projects are verified."</p> }.into_any()
                        } else {
                            pending
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project on_verify=on_verify/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </section>

                <section class="admin-page__section">
                    <h2>"All Projects"</h2>
                    {move || {
                        projects
                            .get()
                            .items
                            .into_iter()
                            .map(|project| view! { <ProjectCard project=project/> })
                            .collect::<Vec<_>>()
                    }}
                </section>
            </div>
        </Show>
    }
}
