use std::time::Duration;

use mvn_query_core::request::SearchRequest;
use mvn_query_core::response::{matching_lines, parse};

use crate::output::ResultLog;
use crate::prelude::QueryError;

/// What a successful query did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySummary {
    pub select_url: String,
    pub total_found: u64,
    pub emitted: usize,
}

/// Runs select queries against a Maven search server.
///
/// Holds no state between queries: every call builds its own request and its
/// own HTTP client, performs one round trip and releases the client on return.
pub struct Connector<L> {
    log: L,
    timeout: Option<Duration>,
}

impl<L: ResultLog> Connector<L> {
    pub fn new(log: L) -> Self {
        Self { log, timeout: None }
    }

    /// Per-request timeout; `None` keeps the HTTP client's default
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[cfg(test)]
    pub fn log(&self) -> &L {
        &self.log
    }

    /// Query `repository_url` for artifacts matching `pattern` and emit one
    /// `<id>:<latestVersion>` line per match, sorted.
    ///
    /// Nothing is emitted unless the whole query succeeds. An empty result is
    /// reported as [`QueryError::NoMatchesFound`].
    pub async fn run_query(
        &mut self,
        repository_url: &str,
        pattern: &str,
        rows: i64,
    ) -> Result<QuerySummary, QueryError> {
        let request = SearchRequest::artifact_query(repository_url, pattern, rows)?;
        let select_url = request.select_url();

        let body = self.fetch(&select_url).await?;
        let response = parse(&body)?;
        let lines = matching_lines(&response)?;

        for line in &lines {
            self.log.info(line);
        }

        Ok(QuerySummary {
            select_url,
            total_found: response.total_found(),
            emitted: lines.len(),
        })
    }

    /// Single GET returning the full body. Status codes are not inspected.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, QueryError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(transport_error)?;

        log::debug!("GET {url}");
        let response = client.get(url).send().await.map_err(transport_error)?;
        log::debug!("HTTP {} from {url}", response.status());

        let body = response.bytes().await.map_err(transport_error)?;
        Ok(body.to_vec())
    }
}

fn transport_error(err: reqwest::Error) -> QueryError {
    QueryError::RepositoryUnreachable(err.to_string())
}
