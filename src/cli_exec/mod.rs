use anyhow::{Context, Result};

use bookstep::providers::AuthProvider;
use bookstep::remote::GiteaClient;

use crate::{CliContext, Commands, ConfigCommands, require_login};

mod browse;
mod config;
mod identity;

pub(super) fn handle_command(ctx: &CliContext, command: Commands) -> Result<()> {
    match command {
        Commands::Login(args) => {
            identity::handle_login_command(ctx, &args.username, args.password, !args.no_remember)?
        }
        Commands::Logout => identity::handle_logout_command(ctx)?,
        Commands::Whoami(args) => identity::handle_whoami_command(ctx, args.json)?,
        Commands::Repos(args) => {
            browse::handle_repos_command(ctx, args.owner, args.query, args.json)?
        }
        Commands::Tree(args) => browse::handle_tree_command(
            ctx,
            &args.owner,
            &args.repo,
            args.branch,
            args.all,
            args.json,
        )?,
        Commands::Config { command } => config::handle_config_command(ctx, command)?,
    }
    Ok(())
}
