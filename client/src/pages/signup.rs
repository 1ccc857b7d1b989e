//! Account creation page.

use leptos::prelude::*;
use leptos_router::components::A;
use projectflow::forms::{SignupErrors, SignupForm};
use projectflow::guard::REDIRECT_DELAY;
use projectflow::net::types::Role;
use projectflow::notice::{Notice, Operation};
use projectflow::{ApiError, AppRoute};

use super::PageHandles;
use crate::state::toast::sleep;

/// Signup form with inline field errors. Goes to `/login` after
/// `REDIRECT_DELAY` on success.
#[component]
pub fn SignupPage() -> impl IntoView {
    let page = PageHandles::new();

    let form = RwSignal::new(SignupForm::default());
    let errors = RwSignal::new(SignupErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let registration = match form.get_untracked().validate() {
            Ok(registration) => registration,
            Err(e) => {
                page.notify(Notice::error(e.to_string()));
                return;
            }
        };
        busy.set(true);
        errors.set(SignupErrors::default());

        let gateway = page.gateway();
        leptos::task::spawn_local(async move {
            let result = gateway.register(&registration).await;
            match &result {
                Ok(()) => {
                    page.report(Operation::Signup, &result);
                    sleep(REDIRECT_DELAY).await;
                    page.go(&AppRoute::Login);
                }
                Err(e) => {
                    errors.set(SignupErrors::from_error(e));
                    if matches!(e, ApiError::Network(_)) {
                        page.report(Operation::Signup, &result);
                    }
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Sign up to start managing projects"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Username"
                        <input
                            class="auth-form__input"
                            class:auth-form__input--error=move || errors.get().username.is_some()
                            type="text"
                            prop:value=move || form.get().username
                            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                        />
                    </label>
                    <FieldError message=Signal::derive(move || errors.get().username)/>

                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            class:auth-form__input--error=move || errors.get().email.is_some()
                            type="email"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <FieldError message=Signal::derive(move || errors.get().email)/>

                    <label class="auth-form__label">
                        "Role"
                        <select
                            class="auth-form__input"
                            prop:value=move || form.get().role.as_str()
                            on:change=move |ev| {
                                if let Ok(role) = event_target_value(&ev).parse::<Role>() {
                                    form.update(|f| f.role = role);
                                }
                            }
                        >
                            <option value="user">"User"</option>
                            <option value="admin">"Admin"</option>
                        </select>
                    </label>

                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </label>

                    <FieldError message=Signal::derive(move || errors.get().general)/>

                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href=AppRoute::Login.path()>"Log in"</A>
                </p>
            </div>
        </div>
    }
}

#[component]
fn FieldError(message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|m| view! { <p class="auth-form__error">{m}</p> })
}
