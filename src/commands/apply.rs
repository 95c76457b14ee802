//! Apply command — one full reconciliation run.

use anyhow::Result;

use crate::application::apply::Outcome;
use crate::application::ports::ApiGateway as _;
use crate::application::reconcile::reconcile;
use crate::cli::HostArgs;
use crate::domain::SyncError;
use crate::infra::ZabbixGateway;
use crate::output::{OutputContext, json, progress};

/// Run the apply command.
///
/// # Errors
///
/// Returns an error on any fatal reconciliation condition: bad server URL,
/// rejected login, unknown desired group, or a failed mutating call. With
/// `--json`, the error object is additionally printed to stdout.
pub fn run(ctx: &OutputContext, args: &HostArgs, as_json: bool) -> Result<()> {
    match converge(ctx, args, as_json) {
        Ok((outcome, warnings)) => {
            render(ctx, &outcome, &warnings, as_json)?;
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

fn converge(
    ctx: &OutputContext,
    args: &HostArgs,
    as_json: bool,
) -> Result<(Outcome, Vec<String>), SyncError> {
    let gateway = ZabbixGateway::new(&args.server)?;
    gateway.login(&args.user, &args.password)?;

    let desired = args.desired();
    if ctx.show_progress() && !as_json {
        let pb = progress::spinner(&format!("reconciling host '{}'", desired.name));
        let result = reconcile(&gateway, &desired);
        progress::finish_clear(&pb);
        result
    } else {
        reconcile(&gateway, &desired)
    }
}

fn render(
    ctx: &OutputContext,
    outcome: &Outcome,
    warnings: &[String],
    as_json: bool,
) -> Result<()> {
    if as_json {
        println!("{}", json::format_outcome(outcome)?);
        return Ok(());
    }
    for warning in warnings {
        ctx.warn(warning);
    }
    if outcome.messages.is_empty() {
        ctx.info("nothing to do");
    } else {
        for line in &outcome.messages {
            ctx.success(line);
        }
    }
    Ok(())
}
