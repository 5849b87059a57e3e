//! Navigation guards mapping authentication state to route decisions.
//!
//! The decision core is pure so the full matrix is testable natively; the
//! two wrapper components re-evaluate it reactively off the auth signal,
//! with no caching in between.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;

/// What a guard tells the router to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the guarded content.
    Render,
    /// Not signed in on a protected route.
    RedirectToLogin,
    /// Already signed in on a login/register route.
    RedirectToHome,
    /// Session restore still in flight; render nothing to avoid flashing
    /// the wrong screen.
    Pending,
}

impl GuardDecision {
    /// The route a redirect decision targets. Keeps the variant/path
    /// pairing in one place so the wrapper components cannot drift.
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            GuardDecision::RedirectToLogin => Some("/login"),
            GuardDecision::RedirectToHome => Some("/home"),
            GuardDecision::Render | GuardDecision::Pending => None,
        }
    }
}

/// Guard for routes that require a session.
pub fn protected(is_authenticated: bool, is_loading: bool) -> GuardDecision {
    if is_loading {
        GuardDecision::Pending
    } else if is_authenticated {
        GuardDecision::Render
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Guard for the login/register routes, which only make sense signed out.
pub fn auth_only(is_authenticated: bool, is_loading: bool) -> GuardDecision {
    if is_loading {
        GuardDecision::Pending
    } else if is_authenticated {
        GuardDecision::RedirectToHome
    } else {
        GuardDecision::Render
    }
}

/// Wrapper for routes that require an authenticated session.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    move || {
        let state = auth.get();
        let decision = protected(state.is_authenticated(), state.loading);
        if let Some(path) = decision.redirect_path() {
            return view! { <Redirect path=path/> }.into_any();
        }
        match decision {
            GuardDecision::Render => children().into_any(),
            _ => ().into_any(),
        }
    }
}

/// Wrapper for the signed-out-only routes.
#[component]
pub fn AuthRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    move || {
        let state = auth.get();
        let decision = auth_only(state.is_authenticated(), state.loading);
        if let Some(path) = decision.redirect_path() {
            return view! { <Redirect path=path/> }.into_any();
        }
        match decision {
            GuardDecision::Render => children().into_any(),
            _ => ().into_any(),
        }
    }
}
