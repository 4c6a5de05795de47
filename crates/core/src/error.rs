/// Failures of a single search query.
///
/// Every variant propagates unchanged to the caller. The core never retries
/// and never terminates the process.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A search parameter violated its construction contract.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Any transport-level failure while talking to the repository.
    #[error("Repository cannot be reached! ({0})")]
    RepositoryUnreachable(String),

    /// The response body could not be mapped onto the search response model.
    #[error("Malformed response from repository: {0}")]
    MalformedResponse(String),

    /// The query succeeded but produced no display lines.
    #[error("No matching artifacts could be found!")]
    NoMatchesFound,
}
