//! Application layer — use-cases wired through port traits.
//!
//! Imports only from `crate::domain` and its own `ports`; all I/O is routed
//! through the injected [`ports::ApiGateway`] implementation.

pub mod apply;
pub mod ports;
pub mod reconcile;
pub mod resolver;
pub mod snapshot;

pub use apply::{Outcome, apply};
pub use ports::{ApiGateway, Method};
pub use reconcile::{BuiltPlan, build_plan, reconcile};
