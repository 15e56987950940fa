use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),
}
