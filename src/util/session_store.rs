//! Durable session persistence in `localStorage`.
//!
//! The identity and token are stored under two independent keys; a pair is
//! only ever read back as a whole. Anything partial or unparsable is purged
//! and reported as absent rather than surfaced as an error. The remember-me
//! values are a separate, longer-lived convenience preference and survive
//! `clear()`.
//!
//! Storage access requires a browser environment and is gated behind the
//! `hydrate` feature; the restore decision itself is pure and tested
//! natively.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::state::auth::Session;

/// Session token.
pub const KEY_TOKEN: &str = "authToken";
/// JSON-serialized identity, including the expiry.
pub const KEY_USER: &str = "user";
/// `"true"`/`"false"` — whether to prefill the login username.
pub const KEY_REMEMBER_ME: &str = "rememberMe";
/// The username to prefill. Survives logout.
pub const KEY_REMEMBERED_USERNAME: &str = "rememberedUsername";

/// Outcome of interpreting the raw stored pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Restore {
    /// Both halves present and parseable.
    Restored(Session),
    /// Present but unusable — the caller must purge both keys.
    Corrupt,
    /// Nothing stored.
    Absent,
}

/// Pure restore decision over the two raw stored values.
///
/// The token stored under [`KEY_TOKEN`] is authoritative and overrides the
/// copy inside the identity JSON. Half a pair counts as corrupt, not
/// absent: it gets purged like a parse failure.
pub fn restore(user_json: Option<&str>, token: Option<&str>) -> Restore {
    match (user_json, token) {
        (Some(user_json), Some(token)) => {
            match serde_json::from_str::<Session>(user_json) {
                Ok(mut session) => {
                    session.token = token.to_owned();
                    Restore::Restored(session)
                }
                Err(_) => Restore::Corrupt,
            }
        }
        (None, None) => Restore::Absent,
        _ => Restore::Corrupt,
    }
}

/// Persist the session as the `authToken`/`user` pair.
///
/// Atomic from the caller's perspective: if either write fails, both keys
/// are removed so a later [`load`] sees an absent session rather than half
/// of one.
pub fn save(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(user_json) = serde_json::to_string(session) else {
            return;
        };
        let wrote = storage.set_item(KEY_TOKEN, &session.token).is_ok()
            && storage.set_item(KEY_USER, &user_json).is_ok();
        if !wrote {
            let _ = storage.remove_item(KEY_TOKEN);
            let _ = storage.remove_item(KEY_USER);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Read the persisted session, purging any corrupt or partial pair.
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let user_json = storage.get_item(KEY_USER).ok().flatten();
        let token = storage.get_item(KEY_TOKEN).ok().flatten();
        match restore(user_json.as_deref(), token.as_deref()) {
            Restore::Restored(session) => Some(session),
            Restore::Corrupt => {
                clear();
                None
            }
            Restore::Absent => None,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove the token/identity pair. The remember-me preference is a
/// different lifetime and is deliberately left alone.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(KEY_TOKEN);
            let _ = storage.remove_item(KEY_USER);
        }
    }
}

/// The bare stored token, for the `Authorization` header.
pub fn token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage().and_then(|s| s.get_item(KEY_TOKEN).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Whether the user asked to have their username prefilled.
pub fn remember_me() -> bool {
    #[cfg(feature = "hydrate")]
    {
        local_storage()
            .and_then(|s| s.get_item(KEY_REMEMBER_ME).ok().flatten())
            .is_some_and(|v| v == "true")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// The username remembered from the last login, if the preference is on.
pub fn remembered_username() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage().and_then(|s| s.get_item(KEY_REMEMBERED_USERNAME).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Record the remember-me choice made on the login form. Turning it off
/// also forgets the stored username.
pub fn set_remember(flag: bool, username: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(KEY_REMEMBER_ME, if flag { "true" } else { "false" });
            if flag {
                let _ = storage.set_item(KEY_REMEMBERED_USERNAME, username);
            } else {
                let _ = storage.remove_item(KEY_REMEMBERED_USERNAME);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (flag, username);
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
