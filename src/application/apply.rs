//! Plan executor — carries a convergence plan out against the gateway.
//!
//! Actions run strictly in plan order. The first failure aborts the run with
//! the action's description attached; nothing already applied is rolled back,
//! and re-running the reconciler against the resulting partial state is the
//! recovery mechanism.

use serde_json::{Value, json};

use crate::application::ports::{ApiGateway, Method};
use crate::domain::plan::{Action, Plan};
use crate::domain::{ApplyError, HostInterface};

// ── Outcome ───────────────────────────────────────────────────────────────────

/// Aggregated result of one reconciliation run.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    /// Whether any mutating call was issued.
    pub changed: bool,
    /// One descriptive line per applied action, accumulated across the whole
    /// run — later phases append, never replace.
    pub messages: Vec<String>,
}

impl Outcome {
    /// The accumulated multi-line message, `"nothing to do"` when no action
    /// was needed.
    #[must_use]
    pub fn msg(&self) -> String {
        if self.messages.is_empty() {
            "nothing to do".to_string()
        } else {
            self.messages.join("\n")
        }
    }
}

// ── Wire encoding ─────────────────────────────────────────────────────────────

fn encode_interface(interface: &HostInterface) -> Value {
    json!({
        "type": 1,
        "main": 1,
        "useip": i32::from(interface.use_ip),
        "ip": interface.ip,
        "dns": interface.dns,
        "port": interface.port.to_string(),
    })
}

fn status_code(enabled: bool) -> i32 {
    // 0 = monitored, 1 = disabled.
    i32::from(!enabled)
}

/// Map an action to the method and parameters it sends on the wire.
///
/// The template-unlink variants share one method and differ only in the
/// parameter key: `templateids` keeps the collected data, `templateids_clear`
/// purges it.
#[must_use]
pub fn encode(action: &Action) -> (Method, Value) {
    match action {
        Action::CreateHost {
            name,
            interface,
            groups,
            templates,
            enabled,
        } => (
            Method::HostCreate,
            json!({
                "host": name,
                "interfaces": [encode_interface(interface)],
                "groups": groups
                    .iter()
                    .map(|g| json!({"groupid": g.id.as_str()}))
                    .collect::<Vec<_>>(),
                "templates": templates
                    .iter()
                    .map(|t| json!({"templateid": t.id.as_str()}))
                    .collect::<Vec<_>>(),
                "status": status_code(*enabled),
            }),
        ),
        Action::DeleteHost { id, .. } => (Method::HostDelete, json!([id.as_str()])),
        Action::SetStatus { id, enabled } => (
            Method::HostUpdate,
            json!({"hostid": id.as_str(), "status": status_code(*enabled)}),
        ),
        Action::AddToGroup { id, group } => (
            Method::HostMassAdd,
            json!({
                "hosts": [{"hostid": id.as_str()}],
                "groups": [{"groupid": group.id.as_str()}],
            }),
        ),
        Action::RemoveFromGroup { id, group } => (
            Method::HostGroupMassRemove,
            json!({
                "groupids": [group.id.as_str()],
                "hostids": [id.as_str()],
            }),
        ),
        Action::LinkTemplate { id, template } => (
            Method::HostMassAdd,
            json!({
                "hosts": [{"hostid": id.as_str()}],
                "templates": [{"templateid": template.id.as_str()}],
            }),
        ),
        Action::UnlinkTemplate {
            id,
            template,
            clear,
        } => {
            let key = if *clear {
                "templateids_clear"
            } else {
                "templateids"
            };
            (
                Method::HostMassRemove,
                json!({
                    "hostids": [id.as_str()],
                    key: [template.id.as_str()],
                }),
            )
        }
    }
}

/// Past-tense line appended to the outcome after an action succeeds.
fn applied_message(action: &Action) -> String {
    match action {
        Action::CreateHost { name, .. } => format!("created host '{name}'"),
        Action::DeleteHost { name, .. } => format!("deleted host '{name}'"),
        Action::SetStatus { enabled: true, .. } => "enabled monitoring".to_string(),
        Action::SetStatus { enabled: false, .. } => "disabled monitoring".to_string(),
        Action::AddToGroup { group, .. } => format!("added host to group '{}'", group.name),
        Action::RemoveFromGroup { group, .. } => {
            format!("removed host from group '{}'", group.name)
        }
        Action::LinkTemplate { template, .. } => format!("linked template '{}'", template.name),
        Action::UnlinkTemplate {
            template,
            clear: false,
            ..
        } => format!("unlinked template '{}', kept collected data", template.name),
        Action::UnlinkTemplate {
            template,
            clear: true,
            ..
        } => format!("unlinked template '{}', cleared collected data", template.name),
    }
}

// ── Executor ──────────────────────────────────────────────────────────────────

/// Apply every action in order, accumulating the outcome.
///
/// # Errors
///
/// Returns an [`ApplyError`] describing the first failing action. Actions
/// already applied stay applied.
pub fn apply(api: &impl ApiGateway, plan: &Plan) -> Result<Outcome, ApplyError> {
    let mut outcome = Outcome::default();
    for action in &plan.actions {
        let (method, params) = encode(action);
        api.request(method, params).map_err(|source| ApplyError {
            action: action.describe(),
            source,
        })?;
        outcome.changed = true;
        outcome.messages.push(applied_message(action));
    }
    Ok(outcome)
}
