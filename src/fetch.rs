//! Background fetches keyed by URL.
//!
//! Each request runs on the tokio blocking pool and reports back over a
//! channel tagged with a generation number. Only the newest generation may
//! change the visible state, so a slow response for an old URL can never
//! overwrite the result for the current one.

use anyhow::Result;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

#[derive(Debug, PartialEq, Eq)]
pub struct FetchResult<'a, T> {
    pub data: Option<&'a T>,
    pub is_loading: bool,
    pub is_error: bool,
}

struct Completion<T> {
    generation: u64,
    result: Result<T>,
}

pub struct Fetch<T> {
    handle: Handle,
    generation: u64,
    key: Option<String>,
    state: FetchState<T>,
    tx: UnboundedSender<Completion<T>>,
    rx: UnboundedReceiver<Completion<T>>,
}

impl<T: Send + 'static> Fetch<T> {
    pub fn new(handle: Handle) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            handle,
            generation: 0,
            key: None,
            state: FetchState::Idle,
            tx,
            rx,
        }
    }

    /// Starts fetching `url` unless it is already the current key.
    ///
    /// `None` or an empty URL never issues a request; it drops any in-flight
    /// work and settles on the idle state. Returns whether a new cycle began
    /// or the state was reset.
    pub fn request<F>(&mut self, url: Option<&str>, job: F) -> bool
    where
        F: FnOnce(String) -> Result<T> + Send + 'static,
    {
        let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
            if self.key.is_none() && matches!(self.state, FetchState::Idle) {
                return false;
            }
            self.reset();
            return true;
        };

        if self.key.as_deref() == Some(url) && !matches!(self.state, FetchState::Idle) {
            return false;
        }

        self.generation += 1;
        let generation = self.generation;
        self.key = Some(url.to_string());
        self.state = FetchState::Loading;

        let tx = self.tx.clone();
        let url = url.to_string();
        self.handle.spawn_blocking(move || {
            let result = job(url);
            // Receiver gone means the owner was dropped; nothing to report to.
            let _ = tx.send(Completion { generation, result });
        });
        true
    }

    /// Applies finished work. Results from superseded generations are dropped.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(done) = self.rx.try_recv() {
            if done.generation != self.generation || !matches!(self.state, FetchState::Loading) {
                continue;
            }
            self.state = match done.result {
                Ok(v) => FetchState::Loaded(v),
                Err(err) => FetchState::Failed(format!("{:#}", err)),
            };
            changed = true;
        }
        changed
    }

    pub fn reset(&mut self) {
        self.generation += 1;
        self.key = None;
        self.state = FetchState::Idle;
    }
}

impl<T> Fetch<T> {
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            FetchState::Loaded(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    pub fn result(&self) -> FetchResult<'_, T> {
        FetchResult {
            data: self.data(),
            is_loading: self.is_loading(),
            is_error: self.error().is_some(),
        }
    }
}

#[cfg(test)]
#[path = "tests/fetch_tests.rs"]
mod tests;
