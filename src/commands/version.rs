//! Version command

use anyhow::Result;

/// Run the version command.
///
/// # Errors
///
/// Never fails; the `Result` keeps the dispatch arms uniform.
pub fn run(json: bool) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    if json {
        println!(r#"{{"version":"{version}"}}"#);
    } else {
        println!("hostsync {version}");
    }
    Ok(())
}
