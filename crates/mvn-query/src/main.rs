use crate::prelude::*;
use clap::{CommandFactory, Parser};

mod connector;
#[cfg(test)]
mod mock_repository;
mod output;
mod prelude;
mod search;

#[derive(Debug, clap::Parser)]
#[command(
    name = "mvn-query",
    version,
    about,
    long_about = "Search artifacts on a Maven repository (search.maven.org by default)"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Option<SubCommands>,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "MVN_QUERY_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum SubCommands {
    /// List artifacts matching a pattern as [group]:[artifact]:[latestVersion]
    Search(crate::search::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        Some(SubCommands::Search(sub_app)) => crate::search::run(sub_app, app.global).await,
        None => {
            App::command()
                .print_help()
                .context("Failed to print help")?;
            Ok(())
        }
    }
}
