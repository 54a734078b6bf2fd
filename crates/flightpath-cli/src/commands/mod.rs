// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs parses arguments, loads the
// dataset and dispatches to these handlers.

pub mod cities;
pub mod flights;
pub mod paths;
pub mod route;
