//! HTTP surface.
//!
//! Four routes over a shared immutable [`ApiContext`]: the symptom form,
//! the symptom-list JSON endpoint, the form-submission predict route and
//! its JSON twin. Everything else is a 404.
//!
//! The router is composable — [`advisor_router`] returns a `Router` that
//! can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::advisor_router;
pub use types::ApiContext;
