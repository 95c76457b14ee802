//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use serde_json::Value;

use crate::domain::ApiError;

// ── API method vocabulary ─────────────────────────────────────────────────────

/// The fixed set of remote methods the reconciler is allowed to call.
///
/// Keeping the vocabulary closed as an enum (rather than free-form strings)
/// means a gateway mock can match on methods exhaustively and no call can
/// slip in outside the reviewed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    HostGet,
    HostCreate,
    HostUpdate,
    HostDelete,
    HostMassAdd,
    HostMassRemove,
    HostGroupGet,
    HostGroupMassRemove,
    TemplateGet,
}

impl Method {
    /// Wire name of the method.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HostGet => "host.get",
            Self::HostCreate => "host.create",
            Self::HostUpdate => "host.update",
            Self::HostDelete => "host.delete",
            Self::HostMassAdd => "host.massadd",
            Self::HostMassRemove => "host.massremove",
            Self::HostGroupGet => "hostgroup.get",
            Self::HostGroupMassRemove => "hostgroup.massremove",
            Self::TemplateGet => "template.get",
        }
    }

    /// Whether the method mutates remote state. Read methods are the only
    /// ones a dry-run is allowed to issue.
    #[must_use]
    pub fn is_mutation(self) -> bool {
        !matches!(self, Self::HostGet | Self::HostGroupGet | Self::TemplateGet)
    }
}

// ── API Gateway Port ──────────────────────────────────────────────────────────

/// Authenticated request/response transport to the remote inventory service.
///
/// The reconciler treats this as an opaque RPC boundary; any wire format is
/// acceptable as long as the method semantics hold. This trait is also the
/// extension point where a retry/backoff decorator would wrap the real
/// client — the core itself never retries.
pub trait ApiGateway {
    /// Authenticate and establish a session used by subsequent requests.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Auth`] when the server rejects the credentials and
    /// [`ApiError::Transport`] when no well-formed reply arrives.
    fn login(&self, user: &str, password: &str) -> Result<(), ApiError>;

    /// Issue one API call and return its `result` payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Call`] for server-side error replies and
    /// [`ApiError::Transport`] for connection or decoding failures.
    fn request(&self, method: Method, params: Value) -> Result<Value, ApiError>;
}
