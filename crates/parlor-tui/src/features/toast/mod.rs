//! Toast notification feature: fire-and-forget messages with TTL expiry.

mod render;
mod state;

pub use render::render;
pub use state::{Toast, ToastKind, ToastStack};
