use super::*;

fn session() -> Session {
    Session {
        id: "u-1".to_owned(),
        username: "maria".to_owned(),
        token: "tok".to_owned(),
        expiration: "2026-01-01T00:00:00Z".to_owned(),
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn starts_loading_and_unauthenticated() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert!(state.error.is_none());
}

#[test]
fn restore_without_session_leaves_loading_phase() {
    let mut state = AuthState::default();
    state.restored(None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn restore_with_session_authenticates() {
    let mut state = AuthState::default();
    state.restored(Some(session()));
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

// =============================================================
// Login / registration transitions
// =============================================================

#[test]
fn begin_attempt_clears_previous_error() {
    let mut state = AuthState {
        error: Some("bad credentials".to_owned()),
        loading: false,
        ..AuthState::default()
    };
    state.begin_attempt();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn complete_login_sets_session() {
    let mut state = AuthState::default();
    state.begin_attempt();
    state.complete_login(session());
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.user_id(), "u-1");
}

#[test]
fn complete_register_never_sets_session() {
    let mut state = AuthState::default();
    state.restored(None);
    state.begin_attempt();
    state.complete_register();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn failure_records_message_and_stays_unauthenticated() {
    let mut state = AuthState::default();
    state.restored(None);
    state.begin_attempt();
    state.fail("request failed: 401".to_owned());
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("request failed: 401"));
}

// =============================================================
// Persistence ordering on login success
// =============================================================

#[test]
fn commit_persists_before_the_session_becomes_visible() {
    let order = std::cell::RefCell::new(Vec::new());
    let state = std::cell::RefCell::new(AuthState::default());
    commit_login(
        session(),
        |s| {
            assert_eq!(s.token, "tok");
            order.borrow_mut().push("persisted");
        },
        |s| {
            assert_eq!(*order.borrow(), ["persisted"]);
            order.borrow_mut().push("visible");
            state.borrow_mut().complete_login(s);
        },
    );
    assert_eq!(*order.borrow(), ["persisted", "visible"]);
    assert!(state.borrow().is_authenticated());
}

// =============================================================
// Logout / error dismissal
// =============================================================

#[test]
fn logout_drops_session_only() {
    let mut state = AuthState::default();
    state.restored(Some(session()));
    state.logged_out();
    assert!(!state.is_authenticated());
    assert_eq!(state.user_id(), "");
}

#[test]
fn clear_error_keeps_authentication_state() {
    let mut state = AuthState::default();
    state.restored(Some(session()));
    state.fail("transient".to_owned());
    state.error_cleared();
    assert!(state.error.is_none());
    assert!(state.is_authenticated());
}
