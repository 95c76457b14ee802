//! Host inventory types shared by the planner and the application services.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

// ── Identifiers ───────────────────────────────────────────────────────────────

/// Opaque identifier assigned by the remote inventory service.
///
/// Identifiers are never shown to the operator; host, group, and template
/// names are the only identity keys on the CLI surface.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub String);

impl EntityId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A host group resolved to its remote identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRef {
    pub name: String,
    pub id: EntityId,
}

/// A monitoring template resolved to its remote identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRef {
    pub name: String,
    pub id: EntityId,
}

// ── Desired state ─────────────────────────────────────────────────────────────

/// Whether the host should exist on the server at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostState {
    #[default]
    Present,
    Absent,
}

/// Network interface used when creating a host.
///
/// The remote schema requires both `dns` and `ip` to be populated at creation;
/// unset values are sent as empty strings and `use_ip` selects which one is
/// authoritative. The interface is never touched on an existing host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInterface {
    pub dns: String,
    pub ip: String,
    pub use_ip: bool,
    pub port: u16,
}

impl Default for HostInterface {
    fn default() -> Self {
        Self {
            dns: String::new(),
            ip: String::new(),
            use_ip: false,
            port: 10050,
        }
    }
}

/// The declared configuration of one monitored host.
#[derive(Debug, Clone)]
pub struct DesiredHost {
    /// Host name — the sole reconciliation key.
    pub name: String,
    pub state: HostState,
    /// Desired monitoring status (enabled = monitored).
    pub enabled: bool,
    /// Creation-time network interface; ignored on existing hosts.
    pub interface: HostInterface,
    pub groups: BTreeSet<String>,
    pub templates: BTreeSet<String>,
    /// Remove current group memberships not in `groups`.
    pub remove_groups: bool,
    /// Unlink current templates not in `templates`.
    pub remove_templates: bool,
    /// When unlinking, also purge the data collected through the template.
    pub clear_templates: bool,
}

// ── Observed state ────────────────────────────────────────────────────────────

/// Point-in-time read of a host's current remote state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSnapshot {
    pub enabled: bool,
    /// Current group memberships, name → identifier.
    pub groups: BTreeMap<String, EntityId>,
    /// Currently linked templates, name → identifier.
    pub templates: BTreeMap<String, EntityId>,
}

/// An existing remote host together with its snapshot.
#[derive(Debug, Clone)]
pub struct ObservedHost {
    pub id: EntityId,
    pub snapshot: HostSnapshot,
}
