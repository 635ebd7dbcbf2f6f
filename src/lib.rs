pub mod config;
pub mod discover;
pub mod error;
pub mod fetch;
pub mod http_client;
pub mod keyword;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod utils;

// re-export types used in tests
pub use crate::error::{FetchError, HarvestError, ParseError};
pub use crate::pipeline::{Outcome, Pipeline, Stage};
