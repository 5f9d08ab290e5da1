//! Command handlers, one module per subcommand.

pub mod list;
pub mod paths;
pub mod which;
