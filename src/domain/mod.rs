//! Domain layer — pure reconciliation types and decision logic.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::net`, or any I/O facility. All functions are
//! synchronous and take data in, returning data out.

pub mod error;
pub mod host;
pub mod plan;

pub use error::{ApiError, ApplyError, ConfigError, ResolveError, SyncError};
pub use host::{
    DesiredHost, EntityId, GroupRef, HostInterface, HostSnapshot, HostState, ObservedHost,
    TemplateRef,
};
pub use plan::{Action, Plan, ResolvedRefs, plan};
