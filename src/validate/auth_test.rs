use super::*;

fn login(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_owned(),
        password: password.to_owned(),
    }
}

fn register(username: &str, email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_requires_both_fields() {
    let Validated::Invalid(errors) = validate_login(login("", "")) else {
        panic!("empty login should be invalid");
    };
    assert_eq!(errors.get("username"), Some(&"Username is required"));
    assert_eq!(errors.get("password"), Some(&"Password is required"));
}

#[test]
fn login_accepts_any_nonempty_pair() {
    assert!(validate_login(login("maria", "hunter2")).is_valid());
}

// =============================================================
// Registration — email
// =============================================================

#[test]
fn register_email_required_before_format() {
    let Validated::Invalid(errors) = validate_register(register("maria", "", "Abcdefgh1")) else {
        panic!("missing email should be invalid");
    };
    assert_eq!(errors.get("email"), Some(&"Email is required"));
}

#[test]
fn register_rejects_malformed_addresses() {
    for email in ["maria", "maria@", "@host.com", "maria@host", "maria@.com", "ma ria@host.com", "a@b@c.com"] {
        let Validated::Invalid(errors) = validate_register(register("maria", email, "Abcdefgh1"))
        else {
            panic!("{email} should be invalid");
        };
        assert_eq!(errors.get("email"), Some(&"Invalid email format"), "{email}");
    }
}

#[test]
fn register_accepts_ordinary_addresses() {
    for email in ["maria@host.com", "maria.perez@sub.host.co"] {
        assert!(validate_register(register("maria", email, "Abcdefgh1")).is_valid(), "{email}");
    }
}

// =============================================================
// Registration — password
// =============================================================

#[test]
fn password_of_eight_characters_fails_length() {
    let Validated::Invalid(errors) = validate_register(register("maria", "m@h.com", "Abcdefg1"))
    else {
        panic!("short password should be invalid");
    };
    assert_eq!(
        errors.get("password"),
        Some(&"Password must be greater than 8 characters")
    );
}

#[test]
fn password_of_nine_characters_with_all_classes_passes() {
    assert!(validate_register(register("maria", "m@h.com", "Abcdefgh1")).is_valid());
}

#[test]
fn password_without_uppercase_fails() {
    let Validated::Invalid(errors) = validate_register(register("maria", "m@h.com", "abcdefghi1"))
    else {
        panic!("lowercase-only password should be invalid");
    };
    assert_eq!(
        errors.get("password"),
        Some(&"Password must contain at least one uppercase letter")
    );
}

#[test]
fn password_over_twenty_characters_fails() {
    let Validated::Invalid(errors) =
        validate_register(register("maria", "m@h.com", "Abcdefgh1Abcdefgh1Abc"))
    else {
        panic!("long password should be invalid");
    };
    assert_eq!(
        errors.get("password"),
        Some(&"Password must be less than or equal to 20 characters")
    );
}

#[test]
fn password_without_digit_or_lowercase_fails() {
    let Validated::Invalid(errors) = validate_register(register("maria", "m@h.com", "ABCDEFGHI1"))
    else {
        panic!("uppercase-only password should be invalid");
    };
    assert_eq!(
        errors.get("password"),
        Some(&"Password must contain at least one lowercase letter")
    );

    let Validated::Invalid(errors) = validate_register(register("maria", "m@h.com", "Abcdefghij"))
    else {
        panic!("digit-less password should be invalid");
    };
    assert_eq!(
        errors.get("password"),
        Some(&"Password must contain at least one number")
    );
}

// =============================================================
// One pass collects every field
// =============================================================

#[test]
fn register_collects_all_violations_at_once() {
    let Validated::Invalid(errors) = validate_register(register("", "not-an-email", "short"))
    else {
        panic!("form should be invalid");
    };
    assert_eq!(errors.len(), 3);
    assert!(errors.contains_key("username"));
    assert!(errors.contains_key("email"));
    assert!(errors.contains_key("password"));
}
