//! Feature slices: each owns its state, reducer, and rendering.

pub mod auth;
pub mod form;
pub mod toast;
