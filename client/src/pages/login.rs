//! Email + password login page.

use leptos::prelude::*;
use leptos_router::components::A;
use projectflow::AppRoute;
use projectflow::forms::LoginForm;
use projectflow::guard::REDIRECT_DELAY;
use projectflow::notice::{Notice, Operation};

use super::PageHandles;
use crate::state::toast::sleep;

/// Stores the session on success and moves to the dashboard after
/// `REDIRECT_DELAY`.
#[component]
pub fn LoginPage() -> impl IntoView {
    let page = PageHandles::new();

    let form = RwSignal::new(LoginForm::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let login = form.get_untracked();
        if let Err(e) = login.validate() {
            page.notify(Notice::error(e.to_string()));
            return;
        }
        busy.set(true);

        let gateway = page.gateway();
        leptos::task::spawn_local(async move {
            let result = gateway.login(login.email.trim(), &login.password).await;
            page.report(Operation::Login, &result);
            if result.is_ok() {
                sleep(REDIRECT_DELAY).await;
                page.go(&AppRoute::HOME);
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Log in to your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
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
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href=AppRoute::Signup.path()>"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
