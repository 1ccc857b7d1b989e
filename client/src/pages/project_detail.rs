//! Project page with its task list and task create/edit/delete dialogs.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use projectflow::AppRoute;
use projectflow::forms::TaskForm;
use projectflow::net::types::{Project, ProjectId, Task, TaskId, TaskStatus};
use projectflow::notice::{Notice, Operation};
use projectflow::state::projects::TaskList;

use super::PageHandles;

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let page = PageHandles::new();
    let project_id = use_params_map().with_untracked(|params| params.get("id")).and_then(|id| id.parse::<ProjectId>().ok());

    let project = RwSignal::new(None::<Project>);
    let tasks = RwSignal::new(TaskList::default());
    let loading = RwSignal::new(true);
    let show_create = RwSignal::new(false);
    let new_task = RwSignal::new(TaskForm::default());
    let editing = RwSignal::new(None::<Task>);
    let edit_form = RwSignal::new(TaskForm::default());

    if let Some(id) = project_id {
        let gateway = page.gateway();
        leptos::task::spawn_local(async move {
            if let Some(mut loaded) = page.finish(Operation::LoadProject, gateway.get_project(id).await) {
                tasks.set(TaskList::new(std::mem::take(&mut loaded.tasks)));
                project.set(Some(loaded));
            }
            loading.set(false);
        });
    } else {
        loading.set(false);
    }

    let on_create = Callback::new(move |()| {
        let Some(id) = project_id else {
            return;
        };
        let draft = match new_task.get_untracked().validate() {
            Ok(draft) => draft,
            Err(e) => {
                page.notify(Notice::error(e.to_string()));
                return;
            }
        };
        let gateway = page.gateway();
        leptos::task::spawn_local(async move {
            if let Some(task) = page.finish(Operation::CreateTask, gateway.create_task(id, &draft).await) {
                tasks.update(|list| list.append(task));
                new_task.set(TaskForm::default());
                show_create.set(false);
            }
        });
    });

    let on_edit = Callback::new(move |task: Task| {
        edit_form.set(TaskForm::from_task(&task));
        editing.set(Some(task));
    });

    let on_update = Callback::new(move |()| {
        let (Some(id), Some(current)) = (project_id, editing.get_untracked()) else {
            return;
        };
        let mut edited = match edit_form.get_untracked().apply(&current) {
            Ok(edited) => edited,
            Err(e) => {
                page.notify(Notice::error(e.to_string()));
                return;
            }
        };
        edited.project = Some(id);
        let gateway = page.gateway();
        leptos::task::spawn_local(async move {
            if let Some(updated) = page.finish(Operation::UpdateTask, gateway.update_task(id, &edited).await) {
                tasks.update(|list| {
                    list.replace(updated);
                });
                editing.set(None);
            }
        });
    });

    let on_delete = Callback::new(move |task_id: TaskId| {
        let Some(id) = project_id else {
            return;
        };
        let gateway = page.gateway();
        leptos::task::spawn_local(async move {
            if page.finish(Operation::DeleteTask, gateway.delete_task(id, task_id).await).is_some() {
                tasks.update(|list| {
                    list.remove(task_id);
                });
            }
        });
    });

    view! {
        <div class="project-page">
            <header class="project-page__header toolbar">
                <A href=AppRoute::Dashboard.path() attr:class="btn">
                    "← Back to Dashboard"
                </A>
            </header>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading project..."</p> }>
                {move || match project.get() {
                    None => view! { <p class="project-page__missing">"Project not found."</p> }.into_any(),
                    Some(p) => {
                        view! {
                            <ProjectSummary project=p/>
                            <section class="project-page__tasks">
                                <div class="project-page__tasks-header">
                                    <h2>{move || format!("Tasks ({})", tasks.with(|t| t.items.len()))}</h2>
                                    <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                                        "+ Add Task"
                                    </button>
                                </div>
                                <For
                                    each=move || tasks.get().items
                                    key=|task| (task.id, task.title.clone(), task.status, task.description.clone())
                                    children=move |task: Task| {
                                        view! { <TaskRow task=task on_edit=on_edit on_delete=on_delete/> }
                                    }
                                />
                            </section>
                        }
                            .into_any()
                    }
                }}
            </Show>

            <Show when=move || show_create.get()>
                <TaskDialog
                    title="Create Task"
                    submit_label="Create"
                    form=new_task
                    on_cancel=Callback::new(move |()| show_create.set(false))
                    on_submit=on_create
                />
            </Show>
            <Show when=move || editing.get().is_some()>
                <TaskDialog
                    title="Edit Task"
                    submit_label="Save"
                    form=edit_form
                    on_cancel=Callback::new(move |()| editing.set(None))
                    on_submit=on_update
                />
            </Show>
        </div>
    }
}

#[component]
fn ProjectSummary(project: Project) -> impl IntoView {
    let (badge_class, badge_text) =
        if project.verified { ("badge badge--verified", "Verified") } else { ("badge badge--pending", "Pending") };
    let created = project.created_date().to_owned();
    let owner = project.owner_username.unwrap_or_default();

    view! {
        <section class="project-page__summary">
            <div class="project-page__title">
                <h1>{project.name}</h1>
                <span class=badge_class>{badge_text}</span>
            </div>
            <p>{project.description}</p>
            <p class="project-page__meta">
                {(!owner.is_empty()).then(|| format!("Owner: {owner} · "))}
                {format!("Created {created}")}
            </p>
        </section>
    }
}

#[component]
fn TaskRow(task: Task, on_edit: Callback<Task>, on_delete: Callback<TaskId>) -> impl IntoView {
    let id = task.id;
    let status_class = format!("badge badge--{}", task.status.as_str());
    let label = task.status.label();
    let for_edit = task.clone();

    view! {
        <div class="task-row">
            <div class="task-row__body">
                <h3>{task.title}</h3>
                <p>{task.description}</p>
            </div>
            <span class=status_class>{label}</span>
            <button class="btn" on:click=move |_| on_edit.run(for_edit.clone())>
                "Edit"
            </button>
            <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                "Delete"
            </button>
        </div>
    }
}

/// Modal dialog shared by task create and edit.
#[component]
fn TaskDialog(
    title: &'static str,
    submit_label: &'static str,
    form: RwSignal<TaskForm>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().title
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
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
                <label class="dialog__label">
                    "Status"
                    <select
                        class="dialog__input"
                        prop:value=move || form.get().status.as_str()
                        on:change=move |ev| {
                            if let Ok(status) = event_target_value(&ev).parse::<TaskStatus>() {
                                form.update(|f| f.status = status);
                            }
                        }
                    >
                        {TaskStatus::ALL
                            .into_iter()
                            .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                        {submit_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
