mod cli_commands;
mod cli_exec;
mod cli_runtime;

pub(crate) use cli_commands::{Commands, ConfigCommands};
pub(crate) use cli_runtime::{CliContext, require_login};

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
