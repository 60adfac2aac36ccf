//! Auth feature: sign-in lifecycle and the signed-in view.

mod render;
mod state;
mod update;

pub use render::render_signed_in;
pub use state::AuthState;
pub use update::handle_sign_in_result;
