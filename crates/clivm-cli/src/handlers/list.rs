//! List command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Print every configured executable with the candidate `which` would pick.
///
/// One `name<TAB>package<TAB>version<TAB>path` line per executable, in
/// declaration order.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let index = ctx.load_index()?;

    if index.is_empty() {
        eprintln!("No executables configured.");
        return Ok(());
    }

    for name in index.executable_names() {
        let Some(candidate) = index.lookup(name.as_str()).first() else {
            continue;
        };
        println!(
            "{}\t{}\t{}\t{}",
            name,
            candidate.package(),
            candidate.version(),
            candidate.executable_path().display()
        );
    }
    Ok(())
}
