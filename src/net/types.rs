//! Wire types for the `/api` collaborator.
//!
//! The backend's field names are Spanish camelCase; Rust fields are
//! snake_case with serde renames. Only `interesFK` needs an explicit
//! rename (the FK suffix defeats the camelCase convention).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// ---- authentication ----------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expiration: String,
    pub userid: String,
    pub username: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    pub status: String,
    pub message: String,
}

// ---- customers ---------------------------------------------------------

/// Full customer record as returned by `Obtener`. The backend may send
/// `null` for the optional columns.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub nombre: String,
    pub apellidos: String,
    pub identificacion: String,
    pub telefono_celular: String,
    #[serde(default)]
    pub otro_telefono: Option<String>,
    pub direccion: String,
    pub f_nacimiento: String,
    pub f_afiliacion: String,
    pub sexo: String,
    #[serde(default)]
    pub resena_personal: Option<String>,
    #[serde(default)]
    pub imagen: Option<String>,
    pub intereses_id: String,
}

/// Row of the `Listado` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CustomerListItem {
    pub id: String,
    pub identificacion: String,
    pub nombre: String,
    pub apellidos: String,
}

/// `Listado` query — empty filter strings mean "no filter"; the backend
/// scopes results by `usuarioId`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFilters {
    pub identificacion: String,
    pub nombre: String,
    pub usuario_id: String,
}

/// `Crear` body. Every field is always present; optional form fields are
/// sent as `""`, never omitted (fixed backend field set).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub nombre: String,
    pub apellidos: String,
    pub identificacion: String,
    pub celular: String,
    pub otro_telefono: String,
    pub direccion: String,
    pub f_nacimiento: String,
    pub f_afiliacion: String,
    pub sexo: String,
    pub resenna_personal: String,
    pub imagen: String,
    #[serde(rename = "interesFK")]
    pub interes_fk: String,
    pub usuario_id: String,
}

/// `Actualizar` body: the create payload plus the target id, flattened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CustomerUpdatePayload {
    pub id: String,
    #[serde(flatten)]
    pub fields: CustomerPayload,
}

// ---- interests ---------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Interest {
    pub id: String,
    pub descripcion: String,
}
