use super::*;

fn form() -> CustomerForm {
    CustomerForm {
        nombre: "Ana".to_owned(),
        apellidos: "Mora".to_owned(),
        identificacion: "101110111".to_owned(),
        telefono_celular: "555".to_owned(),
        otro_telefono: String::new(),
        direccion: "San Jose".to_owned(),
        f_nacimiento: "1990-04-02".to_owned(),
        f_afiliacion: "2024-01-15".to_owned(),
        sexo: "F".to_owned(),
        resena_personal: String::new(),
        imagen: String::new(),
        intereses_id: "i-3".to_owned(),
    }
}

// =============================================================
// Field renames
// =============================================================

#[test]
fn create_payload_renames_phone_field() {
    let value = serde_json::to_value(create_payload(&form(), "u-1")).expect("serializes");
    assert_eq!(value["celular"], "555");
    assert!(value.get("telefonoCelular").is_none());
}

#[test]
fn create_payload_renames_bio_and_interest_fields() {
    let mut form = form();
    form.resena_personal = "bio".to_owned();
    let value = serde_json::to_value(create_payload(&form, "u-1")).expect("serializes");
    assert_eq!(value["resennaPersonal"], "bio");
    assert!(value.get("resenaPersonal").is_none());
    assert_eq!(value["interesFK"], "i-3");
    assert!(value.get("interesesId").is_none());
}

// =============================================================
// Session scoping
// =============================================================

#[test]
fn create_payload_attaches_user_id() {
    let value = serde_json::to_value(create_payload(&form(), "u-1")).expect("serializes");
    assert_eq!(value["usuarioId"], "u-1");
}

#[test]
fn missing_session_passes_empty_user_id_through() {
    let value = serde_json::to_value(create_payload(&form(), "")).expect("serializes");
    assert_eq!(value["usuarioId"], "");
}

// =============================================================
// Fixed field set
// =============================================================

#[test]
fn optional_fields_are_sent_as_empty_strings() {
    let value = serde_json::to_value(create_payload(&form(), "u-1")).expect("serializes");
    assert_eq!(value["otroTelefono"], "");
    assert_eq!(value["resennaPersonal"], "");
    assert_eq!(value["imagen"], "");
}

#[test]
fn form_from_customer_keeps_only_the_date_part() {
    let customer = crate::net::types::Customer {
        id: "c-1".to_owned(),
        nombre: "Ana".to_owned(),
        apellidos: "Mora".to_owned(),
        identificacion: "101110111".to_owned(),
        telefono_celular: "555".to_owned(),
        otro_telefono: None,
        direccion: "San Jose".to_owned(),
        f_nacimiento: "1990-04-02T00:00:00".to_owned(),
        f_afiliacion: "2024-01-15T00:00:00".to_owned(),
        sexo: "F".to_owned(),
        resena_personal: None,
        imagen: None,
        intereses_id: "i-3".to_owned(),
    };
    let form = form_from_customer(&customer);
    assert_eq!(form.f_nacimiento, "1990-04-02");
    assert_eq!(form.f_afiliacion, "2024-01-15");
    // Absent optionals come back as empty strings, ready for the payload.
    assert_eq!(form.otro_telefono, "");
    assert_eq!(form.resena_personal, "");
}

#[test]
fn update_payload_is_flat_and_carries_id() {
    let value =
        serde_json::to_value(update_payload("c-7", &form(), "u-1")).expect("serializes");
    assert_eq!(value["id"], "c-7");
    // Flattened: the create fields sit next to the id, not nested.
    assert_eq!(value["celular"], "555");
    assert!(value.get("fields").is_none());
}
