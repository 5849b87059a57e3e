//! Translation between the form-facing field names and the wire payloads.
//!
//! The form keeps the names the customer screens use; the `Crear` /
//! `Actualizar` endpoints expect three of them renamed:
//!
//! | form            | wire            |
//! |-----------------|-----------------|
//! | telefonoCelular | celular         |
//! | resenaPersonal  | resennaPersonal |
//! | interesesId     | interesFK       |
//!
//! `usuarioId` is injected from the active session here rather than kept
//! on the form. When no session exists it goes out as `""` — the backend
//! rejects it; the client does not second-guess (see DESIGN.md).

#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;

use crate::net::types::{Customer, CustomerPayload, CustomerUpdatePayload};

/// Editable customer form state, under the internal field names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub nombre: String,
    pub apellidos: String,
    pub identificacion: String,
    pub telefono_celular: String,
    pub otro_telefono: String,
    pub direccion: String,
    pub f_nacimiento: String,
    pub f_afiliacion: String,
    pub sexo: String,
    pub resena_personal: String,
    pub imagen: String,
    pub intereses_id: String,
}

/// Load a fetched record into the editable form. The backend sends the
/// two dates as ISO datetimes; the date inputs want only the date part.
pub fn form_from_customer(customer: &Customer) -> CustomerForm {
    CustomerForm {
        nombre: customer.nombre.clone(),
        apellidos: customer.apellidos.clone(),
        identificacion: customer.identificacion.clone(),
        telefono_celular: customer.telefono_celular.clone(),
        otro_telefono: customer.otro_telefono.clone().unwrap_or_default(),
        direccion: customer.direccion.clone(),
        f_nacimiento: date_part(&customer.f_nacimiento),
        f_afiliacion: date_part(&customer.f_afiliacion),
        sexo: customer.sexo.clone(),
        resena_personal: customer.resena_personal.clone().unwrap_or_default(),
        imagen: customer.imagen.clone().unwrap_or_default(),
        intereses_id: customer.intereses_id.clone(),
    }
}

fn date_part(datetime: &str) -> String {
    datetime.split('T').next().unwrap_or(datetime).to_owned()
}

/// Shape a validated form into the `Crear` body. Optional fields that the
/// user left empty are carried as `""`, never dropped.
pub fn create_payload(form: &CustomerForm, usuario_id: &str) -> CustomerPayload {
    CustomerPayload {
        nombre: form.nombre.clone(),
        apellidos: form.apellidos.clone(),
        identificacion: form.identificacion.clone(),
        celular: form.telefono_celular.clone(),
        otro_telefono: form.otro_telefono.clone(),
        direccion: form.direccion.clone(),
        f_nacimiento: form.f_nacimiento.clone(),
        f_afiliacion: form.f_afiliacion.clone(),
        sexo: form.sexo.clone(),
        resenna_personal: form.resena_personal.clone(),
        imagen: form.imagen.clone(),
        interes_fk: form.intereses_id.clone(),
        usuario_id: usuario_id.to_owned(),
    }
}

/// Shape a validated form into the `Actualizar` body for customer `id`.
pub fn update_payload(
    id: &str,
    form: &CustomerForm,
    usuario_id: &str,
) -> CustomerUpdatePayload {
    CustomerUpdatePayload {
        id: id.to_owned(),
        fields: create_payload(form, usuario_id),
    }
}
