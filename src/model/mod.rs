mod auth;
mod config;
mod project;
mod repo;

pub use self::auth::{AccessToken, AuthenticationRecord, RemoteUser};
pub use self::config::{
    AppConfig, DEFAULT_APP_NAME, DEFAULT_SERVER, DEFAULT_TOKENID, ServerConfig,
};
pub use self::project::Project;
pub use self::repo::{RepositoryRef, TreeEntry, TreeListing};
