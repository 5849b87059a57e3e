//! Fallback page for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
        <div class="error-page">
            <h1>"404"</h1>
            <p>"That page does not exist."</p>
            <A href="/home">"Back to home"</A>
        </div>
    }
}
