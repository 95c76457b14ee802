//! hostsync library — exposes modules for integration testing.
//!
//! Reconciles the declared configuration of one monitored host (existence,
//! status, group memberships, template links) against a Zabbix-compatible
//! inventory server, applying only the minimal set of mutating calls needed
//! to converge. Runs are stateless and idempotent; re-running after a partial
//! failure is the recovery mechanism. Concurrent runs against the same host
//! are not coordinated.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod output;
