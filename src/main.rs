//! hostsync CLI - declarative host reconciliation for monitoring inventories

use clap::Parser;

use hostsync::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
