//! REST helpers for the external `/api` collaborator.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the same
//! origin, with the stored token attached as a bearer header.
//! Native (tests, tooling): stubs returning an error string, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<T, String>` where the `Err` is already a
//! user-displayable message; callers surface it through the snackbar or
//! the auth error slot and never panic.

#![allow(clippy::unused_async)]

use crate::net::types::{
    Customer, CustomerFilters, CustomerListItem, CustomerPayload, CustomerUpdatePayload,
    Interest, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};

#[cfg(not(feature = "hydrate"))]
const NOT_IN_BROWSER: &str = "not available outside the browser";

/// Exchange credentials for a token via `POST /api/Authenticate/login`.
///
/// # Errors
///
/// `401` becomes a fixed bad-credentials message; anything else reports
/// the status.
pub async fn login(credentials: &LoginRequest) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/Authenticate/login")
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 401 {
            return Err("Invalid username or password".to_owned());
        }
        if !resp.ok() {
            return Err(format!("login failed: {}", resp.status()));
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Create an account via `POST /api/Authenticate/register`.
///
/// # Errors
///
/// Prefers the backend's own `message` when the body carries one.
pub async fn register(data: &RegisterRequest) -> Result<RegisterResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/Authenticate/register")
            .json(data)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let body = resp.json::<RegisterResponse>().await;
        if !(200..300).contains(&status) {
            return Err(body
                .map(|b| b.message)
                .unwrap_or_else(|_| format!("registration failed: {status}")));
        }
        body.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = data;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Search customers via `POST /api/Cliente/Listado`, scoped by the
/// filter's `usuarioId`.
///
/// # Errors
///
/// Returns a displayable message on transport or decode failure.
pub async fn list_customers(filters: &CustomerFilters) -> Result<Vec<CustomerListItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post("/api/Cliente/Listado"))
            .json(filters)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("customer search failed: {}", resp.status()));
        }
        resp.json::<Vec<CustomerListItem>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filters;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Fetch one customer via `GET /api/Cliente/Obtener/{id}`.
///
/// # Errors
///
/// Returns a displayable message on transport or decode failure.
pub async fn get_customer(id: &str) -> Result<Customer, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/Cliente/Obtener/{id}");
        let resp = authorized(gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("customer fetch failed: {}", resp.status()));
        }
        resp.json::<Customer>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Create a customer via `POST /api/Cliente/Crear`.
///
/// # Errors
///
/// Returns a displayable message on failure.
pub async fn create_customer(payload: &CustomerPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        mutate("/api/Cliente/Crear", payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Update a customer via `POST /api/Cliente/Actualizar`.
///
/// # Errors
///
/// Returns a displayable message on failure.
pub async fn update_customer(payload: &CustomerUpdatePayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        mutate("/api/Cliente/Actualizar", payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Delete a customer via `DELETE /api/Cliente/Eliminar/{id}`.
///
/// # Errors
///
/// Returns a displayable message on failure.
pub async fn delete_customer(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/Cliente/Eliminar/{id}");
        let resp = authorized(gloo_net::http::Request::delete(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("delete failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Fetch the interest catalog via `GET /api/Intereses/Listado`.
///
/// # Errors
///
/// Returns a displayable message on transport or decode failure.
pub async fn list_interests() -> Result<Vec<Interest>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get("/api/Intereses/Listado"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("interest fetch failed: {}", resp.status()));
        }
        resp.json::<Vec<Interest>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// POST a JSON body where the response body is irrelevant.
#[cfg(feature = "hydrate")]
async fn mutate<B: serde::Serialize>(url: &str, body: &B) -> Result<(), String> {
    let resp = authorized(gloo_net::http::Request::post(url))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("request failed: {}", resp.status()));
    }
    Ok(())
}

/// Attach the stored session token as a bearer header, if there is one.
#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::session_store::token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}
