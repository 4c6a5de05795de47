//! Request side of the Maven search API
//!
//! Typed query-string parameters and the select URL builder. Every parameter
//! renders to exactly one `key=value` fragment; the builder only concatenates.

use crate::error::QueryError;

/// Path of the select endpoint, appended verbatim to the repository URL.
pub const SELECT_PATH: &str = "/solrsearch/select";

/// Default public repository queried when no URL is given.
pub const DEFAULT_REPOSITORY_URL: &str = "https://search.maven.org";

/// Response encodings requested through the `wt` parameter.
///
/// The API also serves XML, but only JSON is ever requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
}

impl ResponseFormat {
    /// Label of the format as it appears in the URL
    pub fn label(self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
        }
    }
}

/// A single query-string parameter of a select request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchParameter {
    /// Free-text match string (`q`)
    Pattern(String),
    /// Server-side cap on returned entries (`rows`)
    RowLimit(u64),
    /// Response encoding (`wt`)
    OutputFormat(ResponseFormat),
}

impl SearchParameter {
    pub fn pattern(pattern: impl Into<String>) -> Self {
        SearchParameter::Pattern(pattern.into())
    }

    /// Row limit from caller input.
    ///
    /// Negative values are rejected instead of clamped.
    pub fn row_limit(rows: i64) -> Result<Self, QueryError> {
        u64::try_from(rows)
            .map(SearchParameter::RowLimit)
            .map_err(|_| {
                QueryError::InvalidParameter(format!(
                    "row limit must not be negative, got {rows}"
                ))
            })
    }

    /// The `wt=json` parameter
    pub fn json() -> Self {
        SearchParameter::OutputFormat(ResponseFormat::Json)
    }

    /// Name of the parameter in the query string
    pub fn key(&self) -> &'static str {
        match self {
            SearchParameter::Pattern(_) => "q",
            SearchParameter::RowLimit(_) => "rows",
            SearchParameter::OutputFormat(_) => "wt",
        }
    }

    /// Render the parameter as a `key=value` URL fragment
    pub fn render(&self) -> String {
        let key = self.key();
        match self {
            SearchParameter::Pattern(pattern) => format!("{key}={}", urlencoding::encode(pattern)),
            SearchParameter::RowLimit(rows) => format!("{key}={rows}"),
            SearchParameter::OutputFormat(format) => format!("{key}={}", format.label()),
        }
    }
}

/// Concatenate the repository URL, the select path and the rendered
/// parameters, keeping the caller's parameter order.
///
/// The base URL is not validated; a malformed one surfaces later as a
/// transport failure.
pub fn build_select_url(base_url: &str, parameters: &[SearchParameter]) -> String {
    let query = parameters
        .iter()
        .map(SearchParameter::render)
        .collect::<Vec<_>>()
        .join("&");

    format!("{base_url}{SELECT_PATH}?{query}")
}

/// One select request: the repository URL plus its ordered parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    repository_url: String,
    parameters: Vec<SearchParameter>,
}

impl SearchRequest {
    pub fn new(repository_url: impl Into<String>, parameters: Vec<SearchParameter>) -> Self {
        Self {
            repository_url: repository_url.into(),
            parameters,
        }
    }

    /// The standard artifact query: `q`, `rows` and `wt=json`, in that order.
    ///
    /// Fails with [`QueryError::InvalidParameter`] on a negative row limit.
    pub fn artifact_query(
        repository_url: impl Into<String>,
        pattern: &str,
        rows: i64,
    ) -> Result<Self, QueryError> {
        Ok(Self::new(
            repository_url,
            vec![
                SearchParameter::pattern(pattern),
                SearchParameter::row_limit(rows)?,
                SearchParameter::json(),
            ],
        ))
    }

    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    pub fn parameters(&self) -> &[SearchParameter] {
        &self.parameters
    }

    pub fn select_url(&self) -> String {
        build_select_url(&self.repository_url, &self.parameters)
    }
}
