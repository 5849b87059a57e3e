//! Validation for the customer maintenance form. Messages are the
//! backend team's Spanish strings, shown verbatim under the fields.

#[cfg(test)]
#[path = "customer_test.rs"]
mod customer_test;

use super::{FieldErrors, Validated, check, max_len, optional_max_len, required};
use crate::net::mapper::CustomerForm;

pub fn validate_customer(form: CustomerForm) -> Validated<CustomerForm> {
    let mut errors = FieldErrors::new();

    check(
        &mut errors,
        "nombre",
        required(&form.nombre, "Nombre es requerido")
            .or_else(|| max_len(&form.nombre, 50, "Nombre máximo 50 caracteres")),
    );
    check(
        &mut errors,
        "apellidos",
        required(&form.apellidos, "Apellidos son requeridos")
            .or_else(|| max_len(&form.apellidos, 100, "Apellidos máximo 100 caracteres")),
    );
    check(
        &mut errors,
        "identificacion",
        required(&form.identificacion, "Identificación es requerida").or_else(|| {
            max_len(&form.identificacion, 20, "Identificación máximo 20 caracteres")
        }),
    );
    check(
        &mut errors,
        "telefonoCelular",
        required(&form.telefono_celular, "Teléfono celular es requerido")
            .or_else(|| max_len(&form.telefono_celular, 20, "Teléfono máximo 20 caracteres")),
    );
    check(
        &mut errors,
        "otroTelefono",
        optional_max_len(&form.otro_telefono, 20, "Otro teléfono máximo 20 caracteres"),
    );
    check(
        &mut errors,
        "direccion",
        required(&form.direccion, "Dirección es requerida")
            .or_else(|| max_len(&form.direccion, 200, "Dirección máximo 200 caracteres")),
    );
    check(
        &mut errors,
        "fNacimiento",
        required(&form.f_nacimiento, "Fecha de nacimiento es requerida"),
    );
    check(
        &mut errors,
        "fAfiliacion",
        required(&form.f_afiliacion, "Fecha de afiliación es requerida"),
    );
    check(&mut errors, "sexo", sexo_rule(&form.sexo));
    check(
        &mut errors,
        "resenaPersonal",
        optional_max_len(&form.resena_personal, 200, "Reseña personal máximo 200 caracteres"),
    );
    check(
        &mut errors,
        "interesesId",
        required(&form.intereses_id, "Interés es requerido"),
    );

    if errors.is_empty() {
        Validated::Valid(form)
    } else {
        Validated::Invalid(errors)
    }
}

/// Exactly `M` or `F`, nothing else.
fn sexo_rule(value: &str) -> Option<&'static str> {
    (value != "M" && value != "F").then_some("Sexo debe ser M o F")
}
