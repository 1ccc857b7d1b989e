//! Dashboard listing projects with filter, create and logout actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Profile and project list are fetched
//! together on mount; a created project is appended locally without a
//! re-fetch.

use leptos::prelude::*;
use leptos_router::components::A;
use projectflow::AppRoute;
use projectflow::forms::ProjectForm;
use projectflow::guard::REDIRECT_DELAY;
use projectflow::net::types::Profile;
use projectflow::notice::{Notice, Operation, load_failures};
use projectflow::state::projects::{ProjectFilter, ProjectList};

use super::PageHandles;
use crate::components::project_card::ProjectCard;
use crate::state::toast::sleep;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let page = PageHandles::new();

    let profile = RwSignal::new(None::<Profile>);
    let projects = RwSignal::new(ProjectList::default());
    let loading = RwSignal::new(true);
    let filter = RwSignal::new(ProjectFilter::All);
    let show_create = RwSignal::new(false);
    let project_form = RwSignal::new(ProjectForm::default());

    let gateway = page.gateway();
    leptos::task::spawn_local(async move {
        let (profile_result, projects_result) = futures::join!(gateway.profile(), gateway.list_projects());
        for (operation, error) in load_failures(&profile_result, &projects_result) {
            page.fail(operation, error);
        }
        if let Ok(p) = profile_result {
            profile.set(Some(p));
        }
        if let Ok(items) = projects_result {
            projects.set(ProjectList::new(items));
        }
        loading.set(false);
    });

    let on_logout = move |_| {
        let gateway = page.gateway();
        leptos::task::spawn_local(async move {
            let result = gateway.logout().await;
            page.report(Operation::Logout, &result);
            sleep(REDIRECT_DELAY).await;
            page.go(&AppRoute::Login);
        });
    };

    let on_create = Callback::new(move |()| {
        let new_project = match project_form.get_untracked().validate() {
            Ok(new_project) => new_project,
            Err(e) => {
                page.notify(Notice::error(e.to_string()));
                return;
            }
        };
        let gateway = page.gateway();
        leptos::task::spawn_local(async move {
            if let Some(project) = page.finish(Operation::CreateProject, gateway.create_project(&new_project).await) {
                projects.update(|list| list.append(project));
                project_form.set(ProjectForm::default());
                show_create.set(false);
            }
        });
    });

    let is_admin = move || profile.get().is_some_and(|p| p.is_admin());
    let mine_count = move || projects.with(|list| list.mine_count(profile.get().as_ref()));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"ProjectFlow"</span>
                <span class="toolbar__spacer"></span>
                <Show when=is_admin>
                    <A href=AppRoute::Admin.path() attr:class="btn">
                        "Admin Panel"
                    </A>
                </Show>
                <span class="toolbar__self">
                    {move || profile.get().map(|p| format!("{} ({})", p.username, p.role)).unwrap_or_default()}
                </span>
                <button class="btn toolbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>

            <div class="dashboard-page__controls">
                <button
                    class="btn"
                    class:btn--active=move || filter.get() == ProjectFilter::All
                    on:click=move |_| filter.set(ProjectFilter::All)
                >
                    "All Projects"
                </button>
                <button
                    class="btn"
                    class:btn--active=move || filter.get() == ProjectFilter::Mine
                    on:click=move |_| filter.set(ProjectFilter::Mine)
                >
                    {move || format!("My Projects ({})", mine_count())}
                </button>
                <span class="toolbar__spacer"></span>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New Project"
                </button>
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading projects..."</p> }>
                <div class="dashboard-page__cards">
                    {move || {
                        let current = profile.get();
                        let shown: Vec<_> = projects
                            .with(|list| list.filtered(filter.get(), current.as_ref()).into_iter().cloned().collect());
                        if shown.is_empty() {
                            view! { <p class="dashboard-page__empty">"No projects yet."</p> }.into_any()
                        } else {
                            shown
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </div>
            </Show>

            <Show when=move || show_create.get()>
                <CreateProjectDialog
                    form=project_form
                    on_cancel=Callback::new(move |()| show_create.set(false))
                    on_submit=on_create
                />
            </Show>
        </div>
    }
}

/// Modal dialog for creating a project.
#[component]
fn CreateProjectDialog(form: RwSignal<ProjectForm>, on_cancel: Callback<()>, on_submit: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Project"</h2>
                <label class="dialog__label">
                    "Project Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
