use std::time::Duration;

use crate::connector::Connector;
use crate::output::StdoutLog;
use crate::prelude::{eprintln, *};
use mvn_query_core::request::DEFAULT_REPOSITORY_URL;

#[derive(Debug, clap::Args, Clone)]
pub struct App {
    /// Pattern matched against artifact ids ([group]:[artifact]), e.g. "guice"
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Limits the number of results displayed
    #[arg(
        short = 'n',
        long,
        env = "MVN_QUERY_HEAD",
        default_value = "100",
        allow_negative_numbers = true
    )]
    pub head: i64,

    /// URL of the maven repository
    #[arg(
        long = "url",
        value_name = "URL",
        env = "MVN_QUERY_URL",
        default_value = DEFAULT_REPOSITORY_URL
    )]
    pub repository_url: String,

    /// Request timeout in seconds, greater than zero (HTTP client default when unset)
    #[arg(long, env = "MVN_QUERY_TIMEOUT")]
    pub timeout: Option<u64>,
}

/// Per-request timeout from the `--timeout` option
fn request_timeout(seconds: Option<u64>) -> Result<Option<Duration>> {
    match seconds {
        Some(0) => Err(eyre!("--timeout must be greater than zero")),
        seconds => Ok(seconds.map(Duration::from_secs)),
    }
}

/// Module entry point
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let timeout = request_timeout(app.timeout)?;

    if global.verbose {
        eprintln!("Repository: {}", app.repository_url);
        eprintln!("Pattern: {} (head {})", app.pattern, app.head);
    }

    let mut connector =
        Connector::new(StdoutLog).with_timeout(timeout);

    let summary = connector
        .run_query(&app.repository_url, &app.pattern, app.head)
        .await?;

    if global.verbose {
        eprintln!(
            "{} of {} artifact(s) found via {}",
            summary.emitted, summary.total_found, summary.select_url
        );
    }

    Ok(())
}
