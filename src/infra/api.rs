//! Blocking JSON-RPC 2.0 client for Zabbix-compatible inventory servers.
//!
//! Implements the `ApiGateway` port over `ureq`. Calls are synchronous and
//! sequential with no retry policy — a transiently failing call aborts the
//! run, and a retrying decorator around the port trait is the place to change
//! that, not this client.

use std::cell::{Cell, RefCell};

use serde_json::{Value, json};

use crate::application::ports::{ApiGateway, Method};
use crate::domain::{ApiError, ConfigError};

/// Path the JSON-RPC endpoint lives at, appended when the configured server
/// URL does not already point at a script.
const API_PATH: &str = "api_jsonrpc.php";

/// Authenticated gateway to one inventory server.
///
/// Holds the session token from `user.login`; the token rides in the `auth`
/// field of every subsequent request. Not `Sync` — the reconciler is a single
/// sequential thread of control.
pub struct ZabbixGateway {
    agent: ureq::Agent,
    endpoint: String,
    token: RefCell<Option<String>>,
    next_id: Cell<u64>,
}

impl ZabbixGateway {
    /// Build a gateway for the given server URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidServerUrl`] unless the URL starts with
    /// `http://` or `https://`. Checked before any network use.
    pub fn new(server_url: &str) -> Result<Self, ConfigError> {
        if !server_url.starts_with("http://") && !server_url.starts_with("https://") {
            return Err(ConfigError::InvalidServerUrl(server_url.to_string()));
        }
        let endpoint = if server_url.ends_with(".php") {
            server_url.to_string()
        } else {
            format!("{}/{API_PATH}", server_url.trim_end_matches('/'))
        };
        Ok(Self {
            agent: ureq::agent(),
            endpoint,
            token: RefCell::new(None),
            next_id: Cell::new(1),
        })
    }

    /// Issue one JSON-RPC call and unwrap its `result` member.
    fn call(&self, method: &str, params: Value, auth: Option<&str>) -> Result<Value, ApiError> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let mut body = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": id,
        });
        if let Some(token) = auth {
            body["auth"] = json!(token);
        }

        let transport = |detail: String| ApiError::Transport {
            method: method.to_string(),
            detail,
        };

        let reply: Value = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json-rpc")
            .send_json(body)
            .map_err(|e| transport(e.to_string()))?
            .into_json()
            .map_err(|e| transport(format!("malformed reply: {e}")))?;

        if let Some(error) = reply.get("error") {
            return Err(ApiError::Call {
                method: method.to_string(),
                detail: describe_error_object(error),
            });
        }
        reply
            .get("result")
            .cloned()
            .ok_or_else(|| transport("reply carries neither result nor error".to_string()))
    }
}

/// Flatten the server's error object (`message` + optional `data`) into one line.
fn describe_error_object(error: &Value) -> String {
    let message = error
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("unspecified error");
    match error.get("data").and_then(Value::as_str) {
        Some(data) => format!("{message} {data}"),
        None => message.to_string(),
    }
}

impl ApiGateway for ZabbixGateway {
    fn login(&self, user: &str, password: &str) -> Result<(), ApiError> {
        let result = self
            .call("user.login", json!({"user": user, "password": password}), None)
            .map_err(|e| match e {
                ApiError::Call { detail, .. } => ApiError::Auth {
                    user: user.to_string(),
                    detail,
                },
                transport => transport,
            })?;

        let token = result.as_str().ok_or_else(|| ApiError::Auth {
            user: user.to_string(),
            detail: "login reply did not contain a session token".to_string(),
        })?;
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn request(&self, method: Method, params: Value) -> Result<Value, ApiError> {
        let token = self.token.borrow().clone().ok_or_else(|| ApiError::Call {
            method: method.as_str().to_string(),
            detail: "no active session; login must precede requests".to_string(),
        })?;
        self.call(method.as_str(), params, Some(&token))
    }
}
