//! Application chrome for the signed-in pages: top bar with the current
//! username and logout, plus a sidebar with the section links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Shell wrapping every protected page.
#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = move || {
        auth.get()
            .session
            .map(|s| s.username)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        crate::state::auth::logout(auth);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="layout">
            <header class="layout__appbar">
                <span class="layout__brand">"Clientele"</span>
                <span class="layout__spacer"></span>
                <span class="layout__username">{username}</span>
                <button class="btn layout__logout" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <div class="layout__body">
                <nav class="layout__sidebar">
                    <A href="/home">"Home"</A>
                    <A href="/customers">"Customers"</A>
                </nav>
                <main class="layout__content">{children()}</main>
            </div>
        </div>
    }
}
