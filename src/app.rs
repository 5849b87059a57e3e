//! Root application component with routing, context providers, and the
//! startup session restore.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::snackbar::SnackbarHost;
use crate::guard::{AuthRoute, ProtectedRoute};
use crate::pages::{
    customer_form::CustomerFormPage, customers::CustomersPage, error::ErrorPage, home::HomePage,
    login::LoginPage, register::RegisterPage,
};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Root application component.
///
/// Owns the auth and UI state signals, restores any persisted session
/// before the route tree renders, and wires every route through its
/// guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);

    // Synchronous restore: guards stay in their pending state only for
    // the duration of this call.
    crate::state::auth::restore_session(auth);

    view! {
        <Title text="Clientele"/>

        <Router>
            <Routes fallback=|| view! { <ErrorPage/> }>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <AuthRoute><LoginPage/></AuthRoute> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <AuthRoute><RegisterPage/></AuthRoute> }
                />
                <Route
                    path=StaticSegment("home")
                    view=|| view! { <ProtectedRoute><HomePage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("customers")
                    view=|| view! { <ProtectedRoute><CustomersPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("customers"), StaticSegment("new"))
                    view=|| view! { <ProtectedRoute><CustomerFormPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("customers"), ParamSegment("id"))
                    view=|| view! { <ProtectedRoute><CustomerFormPage/></ProtectedRoute> }
                />
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
            </Routes>
        </Router>

        <SnackbarHost/>
    }
}
