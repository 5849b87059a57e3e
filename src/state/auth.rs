#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{LoginRequest, RegisterRequest};
use crate::util::session_store;

/// The authenticated identity held by the client after a successful login.
///
/// Serialized as-is into the `user` storage key; the field names are the
/// backend's (`expiration` is an ISO datetime that is stored but never
/// checked against the clock on this side).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub id: String,
    pub username: String,
    pub token: String,
    pub expiration: String,
}

/// Authentication state: the current session, restore/login progress, and
/// the single outstanding error message.
///
/// Owned by one `RwSignal<AuthState>` provided via context from `App`.
/// Consumers read it; only the functions in this module write to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    /// The app starts in the restoring phase: `loading` stays `true` until
    /// the session store has been consulted, so guards render nothing
    /// instead of flashing the wrong screen.
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
            error: None,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// The session's user id, or `""` when logged out. List and mutation
    /// payloads pass this through verbatim; the backend scopes by it.
    pub fn user_id(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.id.clone())
            .unwrap_or_default()
    }

    /// Enter the in-flight phase of a login or registration attempt.
    fn begin_attempt(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Login succeeded. The caller must have persisted `session` to the
    /// session store already; observers of this state rely on the store
    /// being consistent the moment `session` is visible.
    fn complete_login(&mut self, session: Session) {
        self.session = Some(session);
        self.loading = false;
    }

    /// Registration succeeded. Deliberately does not touch `session`:
    /// registering and logging in are decoupled.
    fn complete_register(&mut self) {
        self.loading = false;
    }

    fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    fn restored(&mut self, session: Option<Session>) {
        self.session = session;
        self.loading = false;
    }

    fn logged_out(&mut self) {
        self.session = None;
    }

    fn error_cleared(&mut self) {
        self.error = None;
    }
}

/// Consult the session store once at startup and leave the loading phase.
/// A malformed stored pair has already been purged by the store and shows
/// up here as `None`.
pub fn restore_session(auth: RwSignal<AuthState>) {
    let restored = session_store::load();
    auth.update(|a| a.restored(restored));
}

/// Commit a successful login in the required order: `persist` runs to
/// completion before `flip` makes the session visible. Observers treat a
/// visible session as proof the store already holds it, so every success
/// path must go through here.
fn commit_login<P, F>(session: Session, persist: P, flip: F)
where
    P: FnOnce(&Session),
    F: FnOnce(Session),
{
    persist(&session);
    flip(session);
}

/// Attempt a login against the collaborator.
///
/// On success the session is written to the session store *before* the
/// in-memory state flips to authenticated, then the remember-me
/// convenience values are updated.
///
/// # Errors
///
/// Returns the user-displayable failure message (also recorded in
/// `AuthState::error`) so the caller can skip its follow-up navigation.
pub async fn login(
    auth: RwSignal<AuthState>,
    credentials: LoginRequest,
    remember: bool,
) -> Result<(), String> {
    auth.update(AuthState::begin_attempt);
    match api::login(&credentials).await {
        Ok(resp) => {
            let session = Session {
                id: resp.userid,
                username: resp.username,
                token: resp.token,
                expiration: resp.expiration,
            };
            commit_login(
                session,
                |s| {
                    session_store::save(s);
                    session_store::set_remember(remember, &credentials.username);
                },
                |s| auth.update(|a| a.complete_login(s)),
            );
            Ok(())
        }
        Err(message) => {
            auth.update(|a| a.fail(message.clone()));
            Err(message)
        }
    }
}

/// Register a new account. Success never establishes a session; the user
/// still has to log in afterwards.
///
/// # Errors
///
/// Returns the user-displayable failure message (also recorded in
/// `AuthState::error`).
pub async fn register(auth: RwSignal<AuthState>, data: RegisterRequest) -> Result<(), String> {
    auth.update(AuthState::begin_attempt);
    match api::register(&data).await {
        Ok(_) => {
            auth.update(AuthState::complete_register);
            Ok(())
        }
        Err(message) => {
            auth.update(|a| a.fail(message.clone()));
            Err(message)
        }
    }
}

/// Drop the session from storage and memory. The remembered-username
/// preference survives; only the token/identity pair is cleared.
pub fn logout(auth: RwSignal<AuthState>) {
    session_store::clear();
    auth.update(AuthState::logged_out);
}

/// Dismiss the outstanding error message without touching the session.
pub fn clear_error(auth: RwSignal<AuthState>) {
    auth.update(AuthState::error_cleared);
}
