use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use tokio::runtime::Runtime;
use tracing::info;

use ghrepos::cli::{Cli, Command};
use ghrepos::github::GitHubClient;
use ghrepos::logging::init_tracing;
use ghrepos::platform::DesktopPlatform;
use ghrepos::ui::app::App;
use ghrepos::ui::events::EventHandler;
use ghrepos::ui::fetch::GitHubFetchLauncher;
use ghrepos::ui::repos::{ErrorMessage, EMPTY_MESSAGE};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_file());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let client = GitHubClient::new(&config.github).context("Failed to create GitHub client")?;
    let mut store = cli.username_store(&config);

    if let Some(user) = &cli.user {
        let user = user.trim();
        if user.is_empty() {
            bail!("--user must not be blank");
        }
        store.set(user).context("Failed to save username")?;
        info!(user = %user, "User saved from command line");
    }

    match cli.command {
        Some(Command::List { username }) => {
            let user = username.unwrap_or_else(|| store.get());
            list(&runtime, &client, user.trim())
        }
        None => {
            let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
            let events = EventHandler::new(tick_rate);
            let launcher = GitHubFetchLauncher::new(
                Arc::new(client),
                runtime.handle().clone(),
                events.sender(),
            );
            let app = App::new(store, Box::new(DesktopPlatform::new()), Box::new(launcher));
            ghrepos::ui::runtime::run(app, events, tick_rate).context("Terminal UI failed")
        }
    }
}

fn list(runtime: &Runtime, client: &GitHubClient, user: &str) -> anyhow::Result<()> {
    if user.is_empty() {
        bail!("No username given and none saved; run `ghrepos list <USER>`");
    }

    let repos = match runtime.block_on(client.fetch_repositories(user)) {
        Ok(repos) => repos,
        Err(err) if err.is_user_not_found() => bail!("{}", ErrorMessage::NotFound.text()),
        Err(err) => return Err(anyhow::Error::new(err).context(ErrorMessage::Generic.text())),
    };

    if repos.is_empty() {
        eprintln!("{}", EMPTY_MESSAGE);
    }
    for repo in repos {
        println!("{}\t{}", repo.name, repo.html_url);
    }
    Ok(())
}
