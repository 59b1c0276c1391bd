use clap::Args;

#[derive(Args)]
pub(crate) struct ReposArgs {
    /// Owner whose repositories to list (defaults to the signed-in user)
    #[arg(long)]
    pub(crate) owner: Option<String>,
    /// Search repositories by name instead of listing an owner
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct TreeArgs {
    #[arg(long)]
    pub(crate) owner: String,
    #[arg(long)]
    pub(crate) repo: String,
    /// Branch (defaults to the repository's default branch)
    #[arg(long)]
    pub(crate) branch: Option<String>,
    /// List every entry, not only book files
    #[arg(long)]
    pub(crate) all: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
