//! Command handler implementations.

pub mod auth;
pub mod config;
