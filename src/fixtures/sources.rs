// fixtures/sources.rs
//
// Stub SheetSource implementations so the loader can run without a network.

use std::sync::Mutex;

use crate::web_app::api::{LoaderError, SheetSource};

/// Serves the same body for every URL and remembers what was requested
#[derive(Debug, Default)]
pub struct StaticSheetSource {
    body: String,
    requested: Mutex<Vec<String>>,
}

impl StaticSheetSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// URLs fetched so far, oldest first
    pub fn requested_urls(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl SheetSource for StaticSheetSource {
    fn fetch_csv(&self, url: &str) -> Result<String, LoaderError> {
        if let Ok(mut urls) = self.requested.lock() {
            urls.push(url.to_string());
        }
        Ok(self.body.clone())
    }
}

/// Fails every fetch the same way
#[derive(Debug, Clone)]
pub enum FailingSheetSource {
    /// Responds with a non-success HTTP status
    Status(u16),
    /// Cannot reach the host
    Unreachable,
}

impl FailingSheetSource {
    pub fn status(status: u16) -> Self {
        FailingSheetSource::Status(status)
    }
}

impl SheetSource for FailingSheetSource {
    fn fetch_csv(&self, url: &str) -> Result<String, LoaderError> {
        Err(match self {
            FailingSheetSource::Status(status) => LoaderError::Status {
                url: url.to_string(),
                status: *status,
            },
            FailingSheetSource::Unreachable => LoaderError::Transport {
                url: url.to_string(),
                reason: "connection refused".to_string(),
            },
        })
    }
}
