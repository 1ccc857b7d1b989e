//! Project summary card used on the dashboard and the admin panel.

use leptos::prelude::*;
use leptos_router::components::A;
use projectflow::AppRoute;
use projectflow::net::types::{Project, ProjectId};

/// Card with name, description, verification badge and task count.
///
/// When `on_verify` is given and the project is still pending, a Verify
/// button is shown.
#[component]
pub fn ProjectCard(project: Project, #[prop(optional)] on_verify: Option<Callback<ProjectId>>) -> impl IntoView {
    let id = project.id;
    let href = AppRoute::Project(id).path();
    let (badge_class, badge_text) =
        if project.verified { ("badge badge--verified", "Verified") } else { ("badge badge--pending", "Pending") };
    let owner = project.owner_username.clone().unwrap_or_default();
    let tasks = project.task_total();
    let created = project.created_date().to_owned();
    let verify = on_verify.filter(|_| !project.verified);

    view! {
        <div class="project-card">
            <div class="project-card__header">
                <h3 class="project-card__name">{project.name}</h3>
                <span class=badge_class>{badge_text}</span>
            </div>
            <p class="project-card__description">{project.description}</p>
            <div class="project-card__meta">
                {(!owner.is_empty()).then(|| view! { <span class="project-card__owner">{owner}</span> })}
                <span class="project-card__tasks">{format!("{tasks} tasks")}</span>
                <span class="project-card__date">{created}</span>
            </div>
            <div class="project-card__actions">
                <A href=href attr:class="btn">
                    "View Details"
                </A>
                {verify
                    .map(|cb| {
                        view! {
                            <button class="btn btn--primary" on:click=move |_| cb.run(id)>
                                "Verify"
                            </button>
                        }
                    })}
            </div>
        </div>
    }
}
