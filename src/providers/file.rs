use super::FileProvider;

#[derive(Clone, Debug, Default)]
pub struct FileContext {
    filepath: Option<String>,
}

impl FileContext {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileProvider for FileContext {
    fn current_path(&self) -> Option<&str> {
        self.filepath.as_deref()
    }

    fn set_path(&mut self, path: Option<String>) {
        self.filepath = path.filter(|p| !p.trim().is_empty());
    }
}
