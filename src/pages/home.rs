//! Landing page after sign-in.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::MainLayout;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let username = move || {
        auth.get()
            .session
            .map(|s| s.username)
            .unwrap_or_default()
    };

    view! {
        <MainLayout>
            <div class="home-page">
                <h1>{move || format!("Welcome, {}", username())}</h1>
                <p>"Manage your customer records from here."</p>
                <A href="/customers">"Go to customers"</A>
            </div>
        </MainLayout>
    }
}
