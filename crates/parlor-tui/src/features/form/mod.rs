//! Sign-in form feature: fields, focus, errors, submission.

mod render;
mod state;
mod update;

pub use render::render;
pub use state::{FieldInput, FormState};
pub use update::{failure_toast, handle_key};
