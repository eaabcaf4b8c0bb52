// web_app/api/source.rs - Transport for sheet CSV
//
// The loader only needs "give me the body at this URL". Keeping that behind
// a trait lets tests feed canned CSV without a network.

use tracing::debug;

use super::error::LoaderError;

/// Something that can produce the raw CSV text behind an export URL
pub trait SheetSource: Send + Sync {
    /// Fetch the whole body as text. Any transport problem is an error.
    fn fetch_csv(&self, url: &str) -> Result<String, LoaderError>;
}

/// Plain HTTP GET with `ureq`: no auth, no custom headers, no retries
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSheetSource;

impl SheetSource for HttpSheetSource {
    fn fetch_csv(&self, url: &str) -> Result<String, LoaderError> {
        debug!("GET {}", url);
        let response = ureq::get(url).call().map_err(|err| match err {
            ureq::Error::StatusCode(status) => LoaderError::Status {
                url: url.to_string(),
                status,
            },
            other => LoaderError::Transport {
                url: url.to_string(),
                reason: other.to_string(),
            },
        })?;

        response
            .into_body()
            .read_to_string()
            .map_err(|err| LoaderError::Body {
                url: url.to_string(),
                reason: err.to_string(),
            })
    }
}
