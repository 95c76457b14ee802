//! Pure convergence planner.
//!
//! `plan()` turns desired state plus an observed snapshot into an ordered list
//! of mutating actions, without performing any I/O. The executor in
//! `application::apply` carries the actions out; keeping the decision logic
//! here means every convergence rule is unit-testable without a network.

use crate::domain::host::{
    DesiredHost, EntityId, GroupRef, HostInterface, HostState, ObservedHost, TemplateRef,
};

// ── Actions ───────────────────────────────────────────────────────────────────

/// One mutating call against the remote inventory, in apply order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Create the host with its interface, initial groups, templates, and
    /// status in a single call. Always a terminal plan on its own: creation
    /// already applies the full desired state.
    CreateHost {
        name: String,
        interface: HostInterface,
        groups: Vec<GroupRef>,
        templates: Vec<TemplateRef>,
        enabled: bool,
    },
    /// Delete the host. Terminal.
    DeleteHost { id: EntityId, name: String },
    /// Flip the monitoring status.
    SetStatus { id: EntityId, enabled: bool },
    AddToGroup { id: EntityId, group: GroupRef },
    RemoveFromGroup { id: EntityId, group: GroupRef },
    LinkTemplate { id: EntityId, template: TemplateRef },
    /// Unlink a template; `clear` selects purge-on-unlink semantics.
    UnlinkTemplate {
        id: EntityId,
        template: TemplateRef,
        clear: bool,
    },
}

impl Action {
    /// Imperative description, used for dry-run output and failure messages.
    /// Remote identifiers are deliberately absent: names are the only identity
    /// keys shown to the operator.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::CreateHost { name, .. } => format!("create host '{name}'"),
            Self::DeleteHost { name, .. } => format!("delete host '{name}'"),
            Self::SetStatus { enabled: true, .. } => "enable monitoring".to_string(),
            Self::SetStatus { enabled: false, .. } => "disable monitoring".to_string(),
            Self::AddToGroup { group, .. } => format!("add host to group '{}'", group.name),
            Self::RemoveFromGroup { group, .. } => {
                format!("remove host from group '{}'", group.name)
            }
            Self::LinkTemplate { template, .. } => format!("link template '{}'", template.name),
            Self::UnlinkTemplate {
                template,
                clear: false,
                ..
            } => format!("unlink template '{}' (keep collected data)", template.name),
            Self::UnlinkTemplate {
                template,
                clear: true,
                ..
            } => format!("unlink template '{}' (clear collected data)", template.name),
        }
    }
}

/// Names and identifiers resolved for the desired group/template sets.
///
/// Templates the server does not know are already filtered out by the
/// resolver before this struct is built.
#[derive(Debug, Clone, Default)]
pub struct ResolvedRefs {
    pub groups: Vec<GroupRef>,
    pub templates: Vec<TemplateRef>,
}

/// An ordered, idempotent convergence plan.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    pub actions: Vec<Action>,
}

impl Plan {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

/// Compute the minimal ordered set of actions converging `observed` onto
/// `desired`.
///
/// Phase order: existence, status, group membership, template linkage. The
/// existence phase is terminal when it produces an action — creation applies
/// the full desired state in one call, and deletion makes the later phases
/// meaningless. Planning against already-converged state yields an empty plan.
#[must_use]
pub fn plan(desired: &DesiredHost, refs: &ResolvedRefs, observed: Option<&ObservedHost>) -> Plan {
    let mut actions = Vec::new();

    match (desired.state, observed) {
        (HostState::Present, None) => {
            actions.push(Action::CreateHost {
                name: desired.name.clone(),
                interface: desired.interface.clone(),
                groups: refs.groups.clone(),
                templates: refs.templates.clone(),
                enabled: desired.enabled,
            });
            return Plan { actions };
        }
        (HostState::Absent, Some(host)) => {
            actions.push(Action::DeleteHost {
                id: host.id.clone(),
                name: desired.name.clone(),
            });
            return Plan { actions };
        }
        (HostState::Absent, None) => return Plan { actions },
        (HostState::Present, Some(_)) => {}
    }

    // Present + existing host: converge status, then memberships.
    let Some(host) = observed else {
        return Plan { actions };
    };
    let id = &host.id;
    let snap = &host.snapshot;

    if snap.enabled != desired.enabled {
        actions.push(Action::SetStatus {
            id: id.clone(),
            enabled: desired.enabled,
        });
    }

    // Group set-diff: desired-minus-current is always added; current-minus-
    // desired is only removed in destructive mode.
    for group in &refs.groups {
        if !snap.groups.contains_key(&group.name) {
            actions.push(Action::AddToGroup {
                id: id.clone(),
                group: group.clone(),
            });
        }
    }
    if desired.remove_groups {
        for (name, gid) in &snap.groups {
            if !desired.groups.contains(name) {
                actions.push(Action::RemoveFromGroup {
                    id: id.clone(),
                    group: GroupRef {
                        name: name.clone(),
                        id: gid.clone(),
                    },
                });
            }
        }
    }

    // Template set-diff mirrors groups, with the clear-on-unlink dimension.
    for template in &refs.templates {
        if !snap.templates.contains_key(&template.name) {
            actions.push(Action::LinkTemplate {
                id: id.clone(),
                template: template.clone(),
            });
        }
    }
    if desired.remove_templates {
        for (name, tid) in &snap.templates {
            if !desired.templates.contains(name) {
                actions.push(Action::UnlinkTemplate {
                    id: id.clone(),
                    template: TemplateRef {
                        name: name.clone(),
                        id: tid.clone(),
                    },
                    clear: desired.clear_templates,
                });
            }
        }
    }

    Plan { actions }
}
