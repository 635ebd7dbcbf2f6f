use thiserror::Error;

use crate::pipeline::Stage;

/// A single HTTP GET that did not produce a usable body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON array of certificate records, got {0}")]
    NotAnArray(&'static str),
}

/// Terminal failure of a harvest run. Causes are reachable through
/// `source()`; print with `{:#}` on an `anyhow::Error` to see the chain.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("encyclopedia lookup failed")]
    Page(#[source] FetchError),
    #[error("certificate search failed")]
    Search(#[source] FetchError),
    #[error("certificate search response unreadable")]
    Parse(#[from] ParseError),
    #[error("could not write {path}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl HarvestError {
    /// Last stage the pipeline completed before failing.
    pub fn stage(&self) -> Stage {
        match self {
            HarvestError::Page(_) => Stage::Start,
            HarvestError::Search(_) => Stage::Resolved,
            HarvestError::Parse(_) => Stage::Searched,
            HarvestError::Output { .. } => Stage::Parsed,
        }
    }
}
