//! In-process stand-in for a Maven search server.
//!
//! Serves `/solrsearch/select` on an ephemeral local port. Uploaded artifacts
//! are keyed by `group:artifact`; a query returns the artifacts whose id
//! contains `q`, ordered by id and cut to `rows` entries.

use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use mvn_query_core::response::{ArtifactEntry, SearchResponse, SearchResult};

/// An artifact "uploaded" to the mock server
#[derive(Debug, Clone)]
pub struct MockArtifact {
    pub group: String,
    pub artifact: String,
    pub latest_version: String,
}

impl MockArtifact {
    pub fn new(group: &str, artifact: &str, latest_version: &str) -> Self {
        Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            latest_version: latest_version.to_string(),
        }
    }

    pub fn id(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }

    fn to_entry(&self) -> ArtifactEntry {
        ArtifactEntry {
            id: self.id(),
            group: self.group.clone(),
            artifact: self.artifact.clone(),
            latest_version: self.latest_version.clone(),
            version_count: 1,
        }
    }
}

enum Behavior {
    Serve(BTreeMap<String, MockArtifact>),
    Body(String),
    Down,
    Stall(Duration),
}

pub struct MockRepository {
    addr: SocketAddr,
    server: tokio::task::JoinHandle<()>,
}

impl MockRepository {
    pub async fn with_artifacts(artifacts: Vec<MockArtifact>) -> Self {
        let uploaded = artifacts
            .into_iter()
            .map(|artifact| (artifact.id(), artifact))
            .collect();
        Self::start(Behavior::Serve(uploaded)).await
    }

    /// Answers every select request with the given body and status 200
    pub async fn with_body(body: &str) -> Self {
        Self::start(Behavior::Body(body.to_string())).await
    }

    /// Answers every request with an empty 404
    pub async fn down() -> Self {
        Self::start(Behavior::Down).await
    }

    /// Holds every request for `delay` before answering
    pub async fn stalled(delay: Duration) -> Self {
        Self::start(Behavior::Stall(delay)).await
    }

    async fn start(behavior: Behavior) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock repository");
        let addr = listener.local_addr().expect("mock repository address");

        let router = Router::new()
            .route("/solrsearch/select", get(select_handler))
            .fallback(|| async { StatusCode::NOT_FOUND })
            .with_state(Arc::new(behavior));

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self { addr, server }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockRepository {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Base URL of a local port nobody listens on
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe listener address");
    drop(listener);
    format!("http://{addr}")
}

async fn select_handler(
    State(behavior): State<Arc<Behavior>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    match behavior.as_ref() {
        Behavior::Down => StatusCode::NOT_FOUND.into_response(),
        Behavior::Body(body) => (StatusCode::OK, body.clone()).into_response(),
        Behavior::Stall(delay) => {
            tokio::time::sleep(*delay).await;
            StatusCode::OK.into_response()
        }
        Behavior::Serve(uploaded) => {
            let pattern = params.get("q").map(String::as_str).unwrap_or_default();
            let rows = params
                .get("rows")
                .and_then(|rows| rows.parse::<usize>().ok())
                .unwrap_or(0);

            let entries: Vec<ArtifactEntry> = uploaded
                .iter()
                .filter(|(id, _)| id.contains(pattern))
                .take(rows)
                .map(|(_, artifact)| artifact.to_entry())
                .collect();

            Json(SearchResponse {
                response: Some(SearchResult {
                    total_found: entries.len() as u64,
                    entries,
                }),
            })
            .into_response()
        }
    }
}
