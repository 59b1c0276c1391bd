//! One-shot reference data loading at application start.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, OnceLock};

use tokio::runtime::Handle;

use crate::model::AppConfig;
use crate::remote::GiteaClient;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReferenceStatus {
    Pending,
    Loaded { lines: usize, bytes: usize },
    Failed(String),
}

/// Per-URL status of the startup reference fetch, shared with the UI.
#[derive(Clone, Debug, Default)]
pub struct ReferenceData {
    inner: Arc<Mutex<BTreeMap<String, ReferenceStatus>>>,
}

impl ReferenceData {
    fn set(&self, url: &str, status: ReferenceStatus) {
        if let Ok(mut map) = self.inner.lock() {
            map.insert(url.to_string(), status);
        }
    }

    pub fn snapshot(&self) -> BTreeMap<String, ReferenceStatus> {
        self.inner.lock().map(|m| m.clone()).unwrap_or_default()
    }

    /// `(loaded, total)` across all URLs.
    pub fn progress(&self) -> (usize, usize) {
        let snap = self.snapshot();
        let loaded = snap
            .values()
            .filter(|s| matches!(s, ReferenceStatus::Loaded { .. }))
            .count();
        (loaded, snap.len())
    }

    pub fn failures(&self) -> Vec<(String, String)> {
        self.snapshot()
            .into_iter()
            .filter_map(|(url, s)| match s {
                ReferenceStatus::Failed(msg) => Some((url, msg)),
                _ => None,
            })
            .collect()
    }
}

static REFERENCE: OnceLock<ReferenceData> = OnceLock::new();

/// Starts the reference fetch. Only the first call in a process does any
/// work and returns `true`; nothing waits on the spawned requests.
pub fn initialize(config: &AppConfig, handle: &Handle) -> bool {
    let mut first = false;
    let data = REFERENCE.get_or_init(|| {
        first = true;
        ReferenceData::default()
    });
    if !first {
        return false;
    }

    spawn_reference_fetches(config, handle, data);
    true
}

/// Fetches every configured reference URL on the blocking pool, recording
/// each outcome in `data`. URLs start out `Pending`.
pub fn spawn_reference_fetches(config: &AppConfig, handle: &Handle, data: &ReferenceData) {
    for url in config
        .reference_urls
        .iter()
        .map(|u| u.trim())
        .filter(|u| !u.is_empty())
    {
        data.set(url, ReferenceStatus::Pending);
        let data = data.clone();
        let server = config.server.clone();
        let url = url.to_string();
        handle.spawn_blocking(move || {
            let status = match GiteaClient::new(&server, None).and_then(|c| c.get_raw(&url)) {
                Ok(body) => ReferenceStatus::Loaded {
                    lines: body.lines().count(),
                    bytes: body.len(),
                },
                Err(err) => ReferenceStatus::Failed(format!("{:#}", err)),
            };
            data.set(&url, status);
        });
    }
}

pub fn reference_data() -> Option<&'static ReferenceData> {
    REFERENCE.get()
}

#[cfg(test)]
#[path = "tests/startup_tests.rs"]
mod tests;
