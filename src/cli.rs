//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::commands;
use crate::domain::{DesiredHost, HostInterface, HostState};

/// Declarative host reconciliation for Zabbix-compatible monitoring inventories
#[derive(Parser)]
#[command(
    name = "hostsync",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Converge the host onto its declared configuration
    Apply(HostArgs),

    /// Show the actions a run would take, without mutating anything
    Plan(HostArgs),

    /// Show version
    Version,
}

/// Desired state of one host (shared by `apply` and `plan`).
#[derive(Args)]
pub struct HostArgs {
    /// Server URL, e.g. https://zabbix.example.com
    #[arg(long, env = "HOSTSYNC_SERVER")]
    pub server: String,

    /// API user name
    #[arg(long, env = "HOSTSYNC_USER")]
    pub user: String,

    /// API password
    #[arg(long, env = "HOSTSYNC_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Host name — the reconciliation key
    #[arg(long)]
    pub name: String,

    /// Whether the host should exist at all
    #[arg(long, value_enum, default_value_t = StateArg::Present)]
    pub state: StateArg,

    /// Desired monitoring status
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    pub enabled: bool,

    /// DNS name of the agent interface (creation only)
    #[arg(long, default_value = "")]
    pub dns_name: String,

    /// IP address of the agent interface (creation only)
    #[arg(long, default_value = "")]
    pub ip_address: String,

    /// Connect via IP address instead of DNS name (creation only)
    #[arg(long)]
    pub use_ip: bool,

    /// Agent port (creation only)
    #[arg(long, default_value_t = 10050)]
    pub agent_port: u16,

    /// Desired group membership (repeatable); groups must already exist
    #[arg(long = "group", value_name = "NAME")]
    pub groups: Vec<String>,

    /// Desired template link (repeatable)
    #[arg(long = "template", value_name = "NAME")]
    pub templates: Vec<String>,

    /// Remove current group memberships not listed via --group
    #[arg(long)]
    pub remove_groups: bool,

    /// Unlink current templates not listed via --template
    #[arg(long)]
    pub remove_templates: bool,

    /// When unlinking templates, also clear the collected data
    #[arg(long)]
    pub clear_templates: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StateArg {
    Present,
    Absent,
}

impl HostArgs {
    /// Translate the parsed arguments into the domain's desired-state model.
    #[must_use]
    pub fn desired(&self) -> DesiredHost {
        DesiredHost {
            name: self.name.clone(),
            state: match self.state {
                StateArg::Present => HostState::Present,
                StateArg::Absent => HostState::Absent,
            },
            enabled: self.enabled,
            interface: HostInterface {
                dns: self.dns_name.clone(),
                ip: self.ip_address.clone(),
                use_ip: self.use_ip,
                port: self.agent_port,
            },
            groups: self.groups.iter().cloned().collect(),
            templates: self.templates.iter().cloned().collect(),
            remove_groups: self.remove_groups,
            remove_templates: self.remove_templates,
            clear_templates: self.clear_templates,
        }
    }
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub fn run(self) -> Result<()> {
        let Cli {
            no_color,
            quiet,
            json,
            command,
        } = self;
        match command {
            Command::Version => commands::version::run(json),
            Command::Apply(args) => {
                let ctx = crate::output::OutputContext::new(no_color, quiet);
                commands::apply::run(&ctx, &args, json)
            }
            Command::Plan(args) => {
                let ctx = crate::output::OutputContext::new(no_color, quiet);
                commands::plan::run(&ctx, &args, json)
            }
        }
    }
}
