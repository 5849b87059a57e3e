//! Login page: credential form with remember-me and field-level errors.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::session_store;
use crate::validate::auth::validate_login;
use crate::validate::{FieldErrors, Validated};

/// Login page. A failed attempt surfaces the session manager's error as a
/// snackbar and stays here; success navigates to `/home`.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let username = RwSignal::new(session_store::remembered_username().unwrap_or_default());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(session_store::remember_me());
    let errors = RwSignal::new(FieldErrors::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = crate::net::types::LoginRequest {
            username: username.get(),
            password: password.get(),
        };
        match validate_login(form) {
            Validated::Invalid(field_errors) => errors.set(field_errors),
            Validated::Valid(credentials) => {
                errors.set(FieldErrors::new());
                #[cfg(feature = "hydrate")]
                {
                    let navigate = navigate.clone();
                    submitting.set(true);
                    leptos::task::spawn_local(async move {
                        let outcome = crate::state::auth::login(
                            auth,
                            credentials,
                            remember.get_untracked(),
                        )
                        .await;
                        submitting.set(false);
                        match outcome {
                            Ok(()) => navigate("/home", NavigateOptions::default()),
                            Err(message) => {
                                ui.update(|u| {
                                    u.show_snackbar(message, crate::state::ui::Severity::Error);
                                });
                                crate::state::auth::clear_error(auth);
                            }
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (credentials, ui, auth);
                }
            }
        }
    };

    let field_error = move |field: &'static str| {
        errors
            .get()
            .get(field)
            .map(|message| view! { <p class="field-error">{*message}</p> })
    };

    view! {
        <div class="auth-page">
            <form class="auth-page__card" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <label class="auth-page__label">
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                {move || field_error("username")}
                <label class="auth-page__label">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {move || field_error("password")}
                <label class="auth-page__remember">
                    <input
                        type="checkbox"
                        prop:checked=move || remember.get()
                        on:change=move |ev| remember.set(event_target_checked(&ev))
                    />
                    "Remember me"
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-page__switch">
                    "No account? " <a href="/register">"Register"</a>
                </p>
            </form>
        </div>
    }
}
