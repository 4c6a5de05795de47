//! Response side of the Maven search API
//!
//! Only the subset of the select response that the tool displays is modeled.
//! Unknown fields are ignored at every level and missing or `null` parts
//! degrade to empty values instead of failing the parse.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::QueryError;

// ============================================================================
// Domain Models (Input from API)
// ============================================================================

/// Root of the select response.
///
/// The API also sends `responseHeader` and `spellcheck`, which are ignored.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct SearchResponse {
    #[serde(default)]
    pub response: Option<SearchResult>,
}

/// The `response` object: hit count and the bounded page of artifacts
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Total number of matching artifacts on the server
    #[serde(rename = "numFound", default, deserialize_with = "null_as_default")]
    pub total_found: u64,
    /// Returned entries, at most `rows` of them
    #[serde(rename = "docs", default, deserialize_with = "null_as_default")]
    pub entries: Vec<ArtifactEntry>,
}

/// One matching artifact (`docs[]` element)
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ArtifactEntry {
    /// Usually `group:artifact`
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "g", default, deserialize_with = "null_as_default")]
    pub group: String,
    #[serde(rename = "a", default, deserialize_with = "null_as_default")]
    pub artifact: String,
    #[serde(rename = "latestVersion", default, deserialize_with = "null_as_default")]
    pub latest_version: String,
    #[serde(rename = "versionCount", default, deserialize_with = "null_as_default")]
    pub version_count: u64,
}

impl ArtifactEntry {
    /// `<id>:<latestVersion>`
    pub fn display_line(&self) -> String {
        format!("{}:{}", self.id, self.latest_version)
    }
}

impl SearchResponse {
    /// Entries of the result, empty when the server sent no `response`
    pub fn entries(&self) -> &[ArtifactEntry] {
        self.response
            .as_ref()
            .map(|result| result.entries.as_slice())
            .unwrap_or_default()
    }

    pub fn total_found(&self) -> u64 {
        self.response
            .as_ref()
            .map(|result| result.total_found)
            .unwrap_or(0)
    }
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Pure Transformation Functions
// ============================================================================

/// Parse a raw response body.
///
/// Fails with [`QueryError::MalformedResponse`] when the body is not JSON or
/// its structure does not match the model (e.g. `response` is not an object).
pub fn parse(raw: &[u8]) -> Result<SearchResponse, QueryError> {
    serde_json::from_slice(raw).map_err(|e| QueryError::MalformedResponse(e.to_string()))
}

/// Display lines for every entry, sorted byte-wise ascending
pub fn to_display_lines(response: &SearchResponse) -> Vec<String> {
    let mut lines: Vec<String> = response
        .entries()
        .iter()
        .map(ArtifactEntry::display_line)
        .collect();
    lines.sort();
    lines
}

/// Like [`to_display_lines`], but an empty result is a
/// [`QueryError::NoMatchesFound`] failure.
pub fn matching_lines(response: &SearchResponse) -> Result<Vec<String>, QueryError> {
    let lines = to_display_lines(response);
    if lines.is_empty() {
        return Err(QueryError::NoMatchesFound);
    }
    Ok(lines)
}
