//! Core library for the Parlor terminal client.
//!
//! Contains everything that is not UI: configuration, credential
//! validation, the sign-in HTTP client, and the on-disk session store.

pub mod api;
pub mod auth;
pub mod config;
