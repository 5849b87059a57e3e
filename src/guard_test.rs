use super::*;

// =============================================================
// Loading: both guards hold back regardless of authentication
// =============================================================

#[test]
fn loading_renders_nothing_for_both_guards() {
    for is_authenticated in [false, true] {
        assert_eq!(protected(is_authenticated, true), GuardDecision::Pending);
        assert_eq!(auth_only(is_authenticated, true), GuardDecision::Pending);
    }
}

// =============================================================
// Protected routes
// =============================================================

#[test]
fn protected_renders_when_authenticated() {
    assert_eq!(protected(true, false), GuardDecision::Render);
}

#[test]
fn protected_redirects_to_login_when_signed_out() {
    assert_eq!(protected(false, false), GuardDecision::RedirectToLogin);
}

// =============================================================
// Auth-only routes
// =============================================================

#[test]
fn auth_only_renders_when_signed_out() {
    assert_eq!(auth_only(false, false), GuardDecision::Render);
}

#[test]
fn auth_only_redirects_home_when_authenticated() {
    assert_eq!(auth_only(true, false), GuardDecision::RedirectToHome);
}

// =============================================================
// Redirect targets
// =============================================================

#[test]
fn each_redirect_decision_targets_its_own_route() {
    assert_eq!(GuardDecision::RedirectToLogin.redirect_path(), Some("/login"));
    assert_eq!(GuardDecision::RedirectToHome.redirect_path(), Some("/home"));
    assert_eq!(GuardDecision::Render.redirect_path(), None);
    assert_eq!(GuardDecision::Pending.redirect_path(), None);
}

#[test]
fn signed_out_protected_route_lands_on_login() {
    assert_eq!(protected(false, false).redirect_path(), Some("/login"));
}

#[test]
fn signed_in_auth_route_lands_on_home() {
    assert_eq!(auth_only(true, false).redirect_path(), Some("/home"));
}
