use thiserror::Error;

/// Failures of user interaction with the browse page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BrowseError {
    /// The category selector is not rendered (still loading, or its fetch failed).
    #[error("category selector is not available")]
    SelectorUnavailable,
    /// No selector option carries this label.
    #[error("no category option labelled {0:?}")]
    UnknownOption(String),
}
