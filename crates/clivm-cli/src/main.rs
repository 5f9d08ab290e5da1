//! CLI entry point.
//!
//! Parses arguments, sets up logging, bootstraps the context and dispatches
//! to a handler. Errors are reported once here and mapped to an exit code.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use clivm_cli::handlers::which::WhichArgs;
use clivm_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("clivm: {err}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}

/// Log to stderr so stdout stays machine-readable. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(CliConfig::with_defaults(cli.config)?)?;

    match command {
        Commands::Which { name, strict, json } => {
            let args = WhichArgs {
                name,
                strict,
                json,
                verbose: cli.verbose,
            };
            handlers::which::execute(&ctx, &args)?;
        }
        Commands::List => handlers::list::execute(&ctx)?,
        Commands::Paths => handlers::paths::execute(&ctx)?,
    }
    Ok(())
}
