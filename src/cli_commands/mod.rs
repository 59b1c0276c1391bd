use clap::Subcommand;

pub(crate) mod browse;
pub(crate) mod identity;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in with a username and password (creates an access token)
    Login(identity::LoginArgs),

    /// Log out (clear the saved login)
    Logout,

    /// Show the signed-in user
    Whoami(identity::WhoamiArgs),

    /// List or search repositories
    Repos(browse::ReposArgs),

    /// List the book files of a repository
    Tree(browse::TreeArgs),

    /// Show or change config.json
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Print the effective configuration
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Change one setting
    Set {
        /// Setting name: server, tokenid, app-name, reference-urls
        key: String,
        /// New value (comma-separated for reference-urls; empty clears)
        value: String,
    },
}
