use super::*;

fn filled() -> CustomerForm {
    CustomerForm {
        nombre: "Ana".to_owned(),
        apellidos: "Mora".to_owned(),
        identificacion: "101110111".to_owned(),
        telefono_celular: "5550001".to_owned(),
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

fn errors_of(form: CustomerForm) -> FieldErrors {
    match validate_customer(form) {
        Validated::Invalid(errors) => errors,
        Validated::Valid(_) => panic!("form should be invalid"),
    }
}

// =============================================================
// Happy path
// =============================================================

#[test]
fn filled_form_is_valid() {
    assert!(validate_customer(filled()).is_valid());
}

#[test]
fn optional_fields_may_be_empty() {
    let mut form = filled();
    form.otro_telefono = String::new();
    form.resena_personal = String::new();
    form.imagen = String::new();
    assert!(validate_customer(form).is_valid());
}

// =============================================================
// Sex code
// =============================================================

#[test]
fn sexo_accepts_only_the_two_codes() {
    for sexo in ["M", "F"] {
        let mut form = filled();
        form.sexo = sexo.to_owned();
        assert!(validate_customer(form).is_valid(), "{sexo}");
    }
    for sexo in ["X", "m", "MF", ""] {
        let mut form = filled();
        form.sexo = sexo.to_owned();
        assert_eq!(errors_of(form).get("sexo"), Some(&"Sexo debe ser M o F"), "{sexo:?}");
    }
}

// =============================================================
// Length boundaries
// =============================================================

#[test]
fn nombre_boundary_is_fifty_characters() {
    let mut form = filled();
    form.nombre = "a".repeat(50);
    assert!(validate_customer(form).is_valid());

    let mut form = filled();
    form.nombre = "a".repeat(51);
    assert_eq!(
        errors_of(form).get("nombre"),
        Some(&"Nombre máximo 50 caracteres")
    );
}

#[test]
fn optional_phone_is_capped_when_present() {
    let mut form = filled();
    form.otro_telefono = "9".repeat(21);
    assert_eq!(
        errors_of(form).get("otroTelefono"),
        Some(&"Otro teléfono máximo 20 caracteres")
    );
}

#[test]
fn required_beats_length_for_empty_fields() {
    let mut form = filled();
    form.nombre = String::new();
    assert_eq!(errors_of(form).get("nombre"), Some(&"Nombre es requerido"));
}

// =============================================================
// One pass collects every field
// =============================================================

#[test]
fn empty_form_reports_every_required_field() {
    let errors = errors_of(CustomerForm::default());
    for field in [
        "nombre",
        "apellidos",
        "identificacion",
        "telefonoCelular",
        "direccion",
        "fNacimiento",
        "fAfiliacion",
        "sexo",
        "interesesId",
    ] {
        assert!(errors.contains_key(field), "missing {field}");
    }
    // The optional fields are fine empty.
    assert!(!errors.contains_key("otroTelefono"));
    assert!(!errors.contains_key("resenaPersonal"));
}
