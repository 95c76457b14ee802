//! Reconciliation orchestrator: resolve → snapshot → plan → apply.
//!
//! Every run starts from a freshly resolved view of remote truth; nothing is
//! cached between invocations. Resolved identifiers travel as explicit
//! arguments from phase to phase. Concurrent runs against the same host are
//! not coordinated — two simultaneous invocations can race; callers that need
//! exclusion must provide it themselves.

use crate::application::apply::{Outcome, apply};
use crate::application::ports::ApiGateway;
use crate::application::resolver::{Resolution, resolve_groups, resolve_host, resolve_templates};
use crate::application::snapshot;
use crate::domain::plan::{Plan, ResolvedRefs, plan};
use crate::domain::{DesiredHost, HostState, ObservedHost, SyncError};

/// A computed plan plus any non-fatal resolution warnings.
#[derive(Debug, Clone, Default)]
pub struct BuiltPlan {
    pub plan: Plan,
    /// Operator-facing notes, e.g. desired templates the server does not know.
    pub warnings: Vec<String>,
}

/// Resolve names, snapshot the host if it exists, and compute the plan.
/// Issues read calls only — this is the whole of a dry run.
///
/// # Errors
///
/// Fails on transport errors, and on a desired group the server does not
/// know (groups are never auto-created). An unknown desired template is not
/// an error: it is dropped and reported in `warnings`.
pub fn build_plan(api: &impl ApiGateway, desired: &DesiredHost) -> Result<BuiltPlan, SyncError> {
    let host = resolve_host(api, &desired.name).map_err(SyncError::Api)?;

    // Group/template names only matter when the host should exist.
    let (refs, warnings) = if desired.state == HostState::Present {
        let groups = resolve_groups(api, &desired.groups)?;
        let (templates, dropped) = resolve_templates(api, &desired.templates)?;
        let warnings = dropped
            .into_iter()
            .map(|name| format!("template '{name}' not found on the server, ignoring"))
            .collect();
        (ResolvedRefs { groups, templates }, warnings)
    } else {
        (ResolvedRefs::default(), Vec::new())
    };

    let observed = match host {
        Resolution::Found(id) => {
            let snap = snapshot::fetch(api, &id)?;
            Some(ObservedHost { id, snapshot: snap })
        }
        Resolution::NotFound => None,
    };

    Ok(BuiltPlan {
        plan: plan(desired, &refs, observed.as_ref()),
        warnings,
    })
}

/// Full reconciliation run: build the plan and apply it.
///
/// # Errors
///
/// Propagates planning failures and aborts on the first failing mutation
/// with no rollback; partial convergence is recovered by re-running.
pub fn reconcile(
    api: &impl ApiGateway,
    desired: &DesiredHost,
) -> Result<(Outcome, Vec<String>), SyncError> {
    let built = build_plan(api, desired)?;
    let outcome = apply(api, &built.plan)?;
    Ok((outcome, built.warnings))
}
