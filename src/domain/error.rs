//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`, or
//! `crate::application`. All error types implement `thiserror::Error` and
//! convert to `anyhow::Error` via the `?` operator.

use thiserror::Error;

// ── Configuration errors ──────────────────────────────────────────────────────

/// Errors detected before any network traffic.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid server URL '{0}': must start with http:// or https://")]
    InvalidServerUrl(String),
}

// ── API gateway errors ────────────────────────────────────────────────────────

/// Errors crossing the remote API boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login rejected by the server. Aborts before any resolution.
    #[error("authentication failed for user '{user}': {detail}")]
    Auth { user: String, detail: String },

    /// A request reached the server and was answered with an error object.
    #[error("API call '{method}' failed: {detail}")]
    Call { method: String, detail: String },

    /// The request never produced a well-formed reply.
    #[error("transport error during '{method}': {detail}")]
    Transport { method: String, detail: String },
}

// ── Resolution errors ─────────────────────────────────────────────────────────

/// Fatal outcomes of name resolution.
///
/// A host that does not resolve is not an error (it drives the create branch),
/// and an unresolved template is dropped from the desired set; only groups
/// escalate `NotFound` to a failure. See the policy table in
/// `application::resolver`.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("host group '{0}' not found on the server; groups are never auto-created")]
    GroupNotFound(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

// ── Apply errors ──────────────────────────────────────────────────────────────

/// A mutating call failed mid-run. Prior actions in the same run are not
/// rolled back; re-running the reconciler is the recovery mechanism.
#[derive(Debug, Error)]
#[error("failed to {action}: {source}")]
pub struct ApplyError {
    /// Human description of the action that failed, e.g. `"create host 'srv1'"`.
    pub action: String,
    #[source]
    pub source: ApiError,
}

// ── Top-level run error ───────────────────────────────────────────────────────

/// Any fatal condition that aborts a reconciliation run.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Apply(#[from] ApplyError),
}

impl SyncError {
    /// Stable machine-readable code for `--json` error objects.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Api(ApiError::Auth { .. }) => "auth",
            Self::Api(_) => "api",
            Self::Resolve(ResolveError::GroupNotFound(_)) => "group-not-found",
            Self::Resolve(_) => "resolve",
            Self::Apply(_) => "apply",
        }
    }
}
