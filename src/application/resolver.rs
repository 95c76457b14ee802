//! Name resolution — maps operator-facing names to remote identifiers.
//!
//! Every kind is resolved the same way: list the whole collection once, then
//! linear-scan for a case-sensitive exact name match. What differs is the
//! `NotFound` policy, which is deliberate and kind-specific:
//!
//! | Kind     | NotFound outcome                                        |
//! |----------|---------------------------------------------------------|
//! | host     | normal — drives the create-vs-update branch             |
//! | group    | fatal — groups are never auto-created                   |
//! | template | dropped from the desired set, surfaced as a warning     |
//!
//! The host/template leniency versus group fatality is asymmetric on purpose:
//! it reproduces the observed behavior of the system this replaces. Transport
//! failures during listing are always an error, distinct from `NotFound`.

use std::collections::BTreeSet;

use serde_json::{Value, json};

use crate::application::ports::{ApiGateway, Method};
use crate::domain::{ApiError, EntityId, GroupRef, ResolveError, TemplateRef};

/// Outcome of a single name lookup. Transport failures surface separately as
/// `Err`, never as `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(EntityId),
    NotFound,
}

/// Scan a listed collection for an exact name match.
fn scan(listing: &Value, id_key: &str, name_key: &str, name: &str) -> Resolution {
    let Some(entries) = listing.as_array() else {
        return Resolution::NotFound;
    };
    for entry in entries {
        if entry.get(name_key).and_then(Value::as_str) == Some(name) {
            if let Some(id) = entry.get(id_key).and_then(Value::as_str) {
                return Resolution::Found(EntityId::from(id));
            }
        }
    }
    Resolution::NotFound
}

/// Look up a host by name. `NotFound` is a normal outcome here.
///
/// # Errors
///
/// Returns an error when the host listing itself fails.
pub fn resolve_host(api: &impl ApiGateway, name: &str) -> Result<Resolution, ApiError> {
    let listing = api.request(Method::HostGet, json!({"output": ["hostid", "host"]}))?;
    Ok(scan(&listing, "hostid", "host", name))
}

/// Resolve every desired group name, failing on the first unknown one.
///
/// # Errors
///
/// Returns [`ResolveError::GroupNotFound`] naming the first missing group, or
/// a transport error from the listing call.
pub fn resolve_groups(
    api: &impl ApiGateway,
    names: &BTreeSet<String>,
) -> Result<Vec<GroupRef>, ResolveError> {
    if names.is_empty() {
        return Ok(Vec::new());
    }
    let listing = api.request(Method::HostGroupGet, json!({"output": ["groupid", "name"]}))?;

    let mut refs = Vec::with_capacity(names.len());
    for name in names {
        match scan(&listing, "groupid", "name", name) {
            Resolution::Found(id) => refs.push(GroupRef {
                name: name.clone(),
                id,
            }),
            Resolution::NotFound => return Err(ResolveError::GroupNotFound(name.clone())),
        }
    }
    Ok(refs)
}

/// Resolve the desired template names, dropping unknown ones.
///
/// Returns the resolved references plus the names that were dropped, so the
/// caller can surface them to the operator.
///
/// # Errors
///
/// Returns an error only when the template listing itself fails; an unknown
/// template name is not an error.
pub fn resolve_templates(
    api: &impl ApiGateway,
    names: &BTreeSet<String>,
) -> Result<(Vec<TemplateRef>, Vec<String>), ApiError> {
    if names.is_empty() {
        return Ok((Vec::new(), Vec::new()));
    }
    let listing = api.request(Method::TemplateGet, json!({"output": ["templateid", "host"]}))?;

    let mut refs = Vec::new();
    let mut dropped = Vec::new();
    for name in names {
        match scan(&listing, "templateid", "host", name) {
            Resolution::Found(id) => refs.push(TemplateRef {
                name: name.clone(),
                id,
            }),
            Resolution::NotFound => dropped.push(name.clone()),
        }
    }
    Ok((refs, dropped))
}
