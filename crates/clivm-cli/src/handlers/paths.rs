//! Paths command handler.
//!
//! Displays every directory clivm uses and the manifests in effect, for
//! diagnosing unexpected resolutions.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the paths command.
///
/// Prints `key = value` lines; one `config_file` line per manifest in
/// precedence order.
pub fn execute(ctx: &CliContext) -> Result<()> {
    println!("{}", ctx.paths);
    let files = ctx.sources.files();
    if files.is_empty() {
        println!("config_file = (none)");
    }
    for file in files {
        println!("config_file = {}", file.display());
    }
    Ok(())
}
