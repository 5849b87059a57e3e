//! Application pages, one module per route.

pub mod customer_form;
pub mod customers;
pub mod error;
pub mod home;
pub mod login;
pub mod register;
