//! Cross-slice state mutations.
//!
//! Feature reducers return these mutations to request changes outside their
//! own slice. The main reducer applies them in order.

use crate::toast::Toast;

/// Mutations for cross-slice state changes.
#[derive(Debug)]
pub enum StateMutation {
    Toast(ToastMutation),
    Form(FormMutation),
    Auth(AuthMutation),
}

/// Toast slice mutations requested by other slices.
#[derive(Debug)]
pub enum ToastMutation {
    Push(Toast),
}

/// Form slice mutations requested by other slices.
#[derive(Debug)]
pub enum FormMutation {
    SetSubmitting(bool),
}

/// Auth slice mutations requested by other slices.
#[derive(Debug)]
pub enum AuthMutation {
    SetSigningIn,
}
