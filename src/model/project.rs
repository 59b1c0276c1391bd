use serde::{Deserialize, Serialize};

use super::repo::RepositoryRef;

/// A book opened from the Book step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub repository: RepositoryRef,
    pub filepath: String,
    pub opened_at: String,
}

impl Project {
    pub fn label(&self) -> String {
        format!("{}/{}", self.repository.full_name, self.filepath)
    }
}
