//! Shared mock infrastructure for unit tests.
//!
//! Provides a scripted in-memory [`ApiGateway`] so each test file doesn't
//! have to re-define the same boilerplate. The fake serves canned listings
//! for the read methods, records every call, and can be told to fail a
//! specific method.

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::collections::BTreeSet;

use serde_json::{Value, json};

use hostsync::application::ports::{ApiGateway, Method};
use hostsync::domain::{ApiError, DesiredHost, HostInterface, HostState};

/// One named entity as the fake server stores it: `(id, name)`.
pub type Entity = (&'static str, &'static str);

/// Scripted in-memory inventory server.
#[derive(Default)]
pub struct FakeInventory {
    /// The single host the server knows, if any: `(id, name, enabled)`.
    pub host: Option<(&'static str, &'static str, bool)>,
    /// All groups that exist on the server.
    pub all_groups: Vec<Entity>,
    /// All templates that exist on the server.
    pub all_templates: Vec<Entity>,
    /// The host's current group memberships.
    pub host_groups: Vec<Entity>,
    /// The host's currently linked templates.
    pub host_templates: Vec<Entity>,
    /// Fail any call to this method with a server-side error.
    pub fail_on: Option<Method>,
    /// Every request issued, in order.
    pub calls: RefCell<Vec<(Method, Value)>>,
}

impl FakeInventory {
    /// The mutating calls issued, in order.
    pub fn mutations(&self) -> Vec<(Method, Value)> {
        self.calls
            .borrow()
            .iter()
            .filter(|(method, _)| method.is_mutation())
            .cloned()
            .collect()
    }

    fn listing(entities: &[Entity], id_key: &str, name_key: &str) -> Value {
        Value::Array(
            entities
                .iter()
                .map(|(id, name)| json!({id_key: id, name_key: name}))
                .collect(),
        )
    }
}

impl ApiGateway for FakeInventory {
    fn login(&self, _user: &str, _password: &str) -> Result<(), ApiError> {
        Ok(())
    }

    fn request(&self, method: Method, params: Value) -> Result<Value, ApiError> {
        self.calls.borrow_mut().push((method, params.clone()));

        if self.fail_on == Some(method) {
            return Err(ApiError::Call {
                method: method.as_str().to_string(),
                detail: "scripted failure".to_string(),
            });
        }

        let scoped = params.get("hostids").is_some();
        let reply = match method {
            Method::HostGet => {
                let hosts: Vec<Value> = self
                    .host
                    .iter()
                    .map(|(id, name, enabled)| {
                        json!({
                            "hostid": id,
                            "host": name,
                            "status": if *enabled { "0" } else { "1" },
                        })
                    })
                    .collect();
                Value::Array(hosts)
            }
            Method::HostGroupGet if scoped => {
                Self::listing(&self.host_groups, "groupid", "name")
            }
            Method::HostGroupGet => Self::listing(&self.all_groups, "groupid", "name"),
            Method::TemplateGet if scoped => {
                Self::listing(&self.host_templates, "templateid", "host")
            }
            Method::TemplateGet => Self::listing(&self.all_templates, "templateid", "host"),
            // Mutations succeed with an empty result object.
            _ => json!({}),
        };
        Ok(reply)
    }
}

// ── Desired-state builders ────────────────────────────────────────────────────

/// A present, enabled host with no groups or templates.
pub fn desired(name: &str) -> DesiredHost {
    DesiredHost {
        name: name.to_string(),
        state: HostState::Present,
        enabled: true,
        interface: HostInterface::default(),
        groups: BTreeSet::new(),
        templates: BTreeSet::new(),
        remove_groups: false,
        remove_templates: false,
        clear_templates: false,
    }
}

pub fn names(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(ToString::to_string).collect()
}
