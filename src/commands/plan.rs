//! Plan command — dry run showing the actions a reconciliation would take.
//!
//! Issues read calls only (resolution and snapshot); nothing on the server
//! changes.

use anyhow::Result;

use crate::application::ports::ApiGateway as _;
use crate::application::reconcile::{BuiltPlan, build_plan};
use crate::cli::HostArgs;
use crate::domain::SyncError;
use crate::infra::ZabbixGateway;
use crate::output::{OutputContext, json};

/// Run the plan command.
///
/// # Errors
///
/// Fails on the same conditions as `apply`, short of mutation failures:
/// bad server URL, rejected login, unknown desired group, transport errors.
pub fn run(ctx: &OutputContext, args: &HostArgs, as_json: bool) -> Result<()> {
    match dry_run(args) {
        Ok(built) => {
            render(ctx, &built, as_json)?;
            Ok(())
        }
        Err(e) => {
            if as_json {
                println!("{}", json::format_error(&e.to_string(), e.code())?);
            }
            Err(e.into())
        }
    }
}

fn dry_run(args: &HostArgs) -> Result<BuiltPlan, SyncError> {
    let gateway = ZabbixGateway::new(&args.server)?;
    gateway.login(&args.user, &args.password)?;
    build_plan(&gateway, &args.desired())
}

fn render(ctx: &OutputContext, built: &BuiltPlan, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", json::format_plan(&built.plan)?);
        return Ok(());
    }
    for warning in &built.warnings {
        ctx.warn(warning);
    }
    if built.plan.is_empty() {
        ctx.info("no changes; remote state already matches");
        return Ok(());
    }
    for action in &built.plan.actions {
        ctx.step(&action.describe());
    }
    let noun = if built.plan.len() == 1 {
        "action"
    } else {
        "actions"
    };
    ctx.info(&format!("{} {noun} planned", built.plan.len()));
    Ok(())
}
