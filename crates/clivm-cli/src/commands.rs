//! Subcommand definitions.

use clap::Subcommand;

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the absolute path a command name resolves to
    Which {
        /// Command name, e.g. `gh`
        name: String,
        /// Skip configured binaries that are missing or not executable
        #[arg(long)]
        strict: bool,
        /// Print the resolution as JSON
        #[arg(long)]
        json: bool,
    },
    /// List configured executables and the package each resolves to
    List,
    /// Show clivm directories and the config files in effect
    Paths,
}
