//! Which command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::ResolutionStatus;

/// Arguments for `clivm which`.
#[derive(Debug, Clone)]
pub struct WhichArgs {
    pub name: String,
    pub strict: bool,
    pub json: bool,
    pub verbose: bool,
}

/// Resolve `args.name` and print the result.
///
/// Failures are still rendered (as JSON or as the list of probes in verbose
/// mode) before the error is returned for the exit code.
pub fn execute(ctx: &CliContext, args: &WhichArgs) -> Result<()> {
    let resolver = ctx.resolver(args.strict)?;
    let result = resolver.resolve(&args.name);

    if args.json {
        let status = match &result {
            Ok(resolution) => ResolutionStatus::resolved(&args.name, resolution),
            Err(err) => ResolutionStatus::failed(err),
        };
        println!("{}", serde_json::to_string_pretty(&status)?);
    }

    match result {
        Ok(resolution) => {
            tracing::debug!(source = %resolution.source, "Resolved {}", args.name);
            if !args.json {
                println!("{}", resolution.path.display());
            }
            Ok(())
        }
        Err(err) => {
            if args.verbose && !args.json {
                eprintln!("Tried:\n{}", err.tried_report());
            }
            Err(CliError::from(err).into())
        }
    }
}
