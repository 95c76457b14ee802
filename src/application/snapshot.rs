//! Inventory snapshot — a fresh read of one host's remote state.
//!
//! Three independent reads, each scoped by the host identifier: monitoring
//! status, group memberships, template links. Only ever fetched once a host
//! identifier exists; the planner receives `None` otherwise and the fetch is
//! skipped entirely.

use std::collections::BTreeMap;

use serde_json::{Value, json};

use crate::application::ports::{ApiGateway, Method};
use crate::domain::{ApiError, EntityId, HostSnapshot};

/// Fetch the current status, groups, and templates of the given host.
///
/// # Errors
///
/// Returns an error when any of the three reads fails or the host is no
/// longer returned by the server (e.g. deleted between resolution and
/// snapshot).
pub fn fetch(api: &impl ApiGateway, host_id: &EntityId) -> Result<HostSnapshot, ApiError> {
    let enabled = fetch_status(api, host_id)?;
    let groups = fetch_named(
        api,
        Method::HostGroupGet,
        json!({"output": ["groupid", "name"], "hostids": [host_id.as_str()]}),
        "groupid",
        "name",
    )?;
    let templates = fetch_named(
        api,
        Method::TemplateGet,
        json!({"output": ["templateid", "host"], "hostids": [host_id.as_str()]}),
        "templateid",
        "host",
    )?;

    Ok(HostSnapshot {
        enabled,
        groups,
        templates,
    })
}

/// Read the host's monitoring status. Wire encoding: `"0"` = monitored.
fn fetch_status(api: &impl ApiGateway, host_id: &EntityId) -> Result<bool, ApiError> {
    let listing = api.request(
        Method::HostGet,
        json!({"output": ["hostid", "status"], "hostids": [host_id.as_str()]}),
    )?;
    let status = listing
        .as_array()
        .and_then(|hosts| hosts.first())
        .and_then(|host| host.get("status"))
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::Call {
            method: Method::HostGet.as_str().to_string(),
            detail: "host vanished between resolution and snapshot".to_string(),
        })?;
    Ok(status == "0")
}

/// Read a name → identifier mapping scoped to the host.
fn fetch_named(
    api: &impl ApiGateway,
    method: Method,
    params: Value,
    id_key: &str,
    name_key: &str,
) -> Result<BTreeMap<String, EntityId>, ApiError> {
    let listing = api.request(method, params)?;
    let mut map = BTreeMap::new();
    if let Some(entries) = listing.as_array() {
        for entry in entries {
            if let (Some(name), Some(id)) = (
                entry.get(name_key).and_then(Value::as_str),
                entry.get(id_key).and_then(Value::as_str),
            ) {
                map.insert(name.to_string(), EntityId::from(id));
            }
        }
    }
    Ok(map)
}
