use clap::Args;

#[derive(Args)]
pub(crate) struct LoginArgs {
    #[arg(long)]
    pub(crate) username: String,
    /// Read from stdin when omitted
    #[arg(long)]
    pub(crate) password: Option<String>,
    /// Do not keep the login after this command
    #[arg(long)]
    pub(crate) no_remember: bool,
}

#[derive(Args)]
pub(crate) struct WhoamiArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
