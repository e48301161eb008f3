// HTTP API module.
// Service registry, operation handlers, and the axum router exposing them.

pub mod operations;
pub mod registry;
pub mod router;

pub use registry::{Operation, RouteError, Service};
pub use router::build_router;
