use super::*;

const USER_JSON: &str = concat!(
    r#"{"id":"u-9","username":"maria","#,
    r#""token":"stale","expiration":"2026-01-01T00:00:00Z"}"#
);

// =============================================================
// Restore decision
// =============================================================

#[test]
fn nothing_stored_is_absent() {
    assert_eq!(restore(None, None), Restore::Absent);
}

#[test]
fn valid_pair_restores_session() {
    let Restore::Restored(session) = restore(Some(USER_JSON), Some("fresh")) else {
        panic!("pair should restore");
    };
    assert_eq!(session.id, "u-9");
    assert_eq!(session.username, "maria");
    assert_eq!(session.expiration, "2026-01-01T00:00:00Z");
}

#[test]
fn token_key_overrides_identity_copy() {
    let Restore::Restored(session) = restore(Some(USER_JSON), Some("fresh")) else {
        panic!("pair should restore");
    };
    assert_eq!(session.token, "fresh");
}

#[test]
fn unparsable_identity_is_corrupt() {
    assert_eq!(restore(Some("{not json"), Some("tok")), Restore::Corrupt);
    assert_eq!(restore(Some(r#"{"id":"u-9"}"#), Some("tok")), Restore::Corrupt);
}

#[test]
fn half_a_pair_is_corrupt_not_absent() {
    assert_eq!(restore(Some(USER_JSON), None), Restore::Corrupt);
    assert_eq!(restore(None, Some("tok")), Restore::Corrupt);
}

// =============================================================
// Stored identity shape
// =============================================================

#[test]
fn session_round_trips_through_storage_json() {
    let session = Session {
        id: "u-9".to_owned(),
        username: "maria".to_owned(),
        token: "tok".to_owned(),
        expiration: "2026-01-01T00:00:00Z".to_owned(),
    };
    let json = serde_json::to_string(&session).expect("session serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    // The stored keys are the backend's field names.
    for key in ["id", "username", "token", "expiration"] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(restore(Some(&json), Some("tok")), Restore::Restored(session));
}
