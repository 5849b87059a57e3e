//! Registration page. Success never signs the user in; it shows a
//! confirmation and sends them to the login page.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::validate::auth::validate_register;
use crate::validate::{FieldErrors, Validated};

/// How long the success snackbar stays visible before moving on.
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY_MS: u64 = 2000;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = crate::net::types::RegisterRequest {
            username: username.get(),
            email: email.get(),
            password: password.get(),
        };
        match validate_register(form) {
            Validated::Invalid(field_errors) => errors.set(field_errors),
            Validated::Valid(data) => {
                errors.set(FieldErrors::new());
                #[cfg(feature = "hydrate")]
                {
                    let navigate = navigate.clone();
                    submitting.set(true);
                    leptos::task::spawn_local(async move {
                        let outcome = crate::state::auth::register(auth, data).await;
                        submitting.set(false);
                        match outcome {
                            Ok(()) => {
                                ui.update(|u| {
                                    u.show_snackbar(
                                        "Registration successful, you can now sign in",
                                        crate::state::ui::Severity::Success,
                                    );
                                });
                                gloo_timers::future::sleep(std::time::Duration::from_millis(
                                    REDIRECT_DELAY_MS,
                                ))
                                .await;
                                navigate("/login", NavigateOptions::default());
                            }
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
                    let _ = (data, ui, auth);
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
                <h1>"Create account"</h1>
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
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                {move || field_error("email")}
                <label class="auth-page__label">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {move || field_error("password")}
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating..." } else { "Register" }}
                </button>
                <p class="auth-page__switch">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </form>
        </div>
    }
}
