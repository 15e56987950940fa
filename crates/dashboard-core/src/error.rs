use std::path::PathBuf;

use record_filter::FilterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Failed to parse fixtures: {0}")]
    Fixtures(String),

    #[error("Invalid currency amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown utility: {0}")]
    UnknownUtility(String),

    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Filter(#[from] FilterError),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
