use std::fs::OpenOptions;

use anyhow::Result;
use folio_term::application::cli;
use folio_term::application::ui::destruct_terminal_for_panic;
use folio_term::configuration::{Config, ConfigKey};
use folio_term::domain::models::{Action, LinkOpenerName};
use folio_term::domain::services::actions::ActionsService;
use folio_term::infrastructure::links::LinkOpenerManager;
use log::LevelFilter;
use tokio::sync::mpsc;
use tokio::task;

mod terminal_ui;

/// Sends logs to a file so they never draw over the alternate screen.
fn init_logger(log_level: &str, log_file: &str) -> Result<()> {
    let log_level_filter = log_level.parse().unwrap_or(LevelFilter::Info);
    if log_level_filter == LevelFilter::Off {
        return Ok(());
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    return Ok(());
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli::build().get_matches();

    let log_level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("info");
    let log_file = matches
        .get_one::<String>("log-file")
        .map(String::as_str)
        .unwrap_or("folio.log");
    init_logger(log_level, log_file)?;

    if !cli::handle(&matches).await? {
        return Ok(());
    }

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let opener_name =
        LinkOpenerName::parse(&Config::get(ConfigKey::LinkOpener)).unwrap_or_default();
    let opener = LinkOpenerManager::get(opener_name);

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let mut background_futures = task::JoinSet::new();
    background_futures.spawn(async move { ActionsService::start(opener, &mut action_rx).await });

    let result = terminal_ui::run(action_tx).await;
    if result.is_err() {
        destruct_terminal_for_panic();
    }

    // The UI dropped its sender, so the actions service drains and returns.
    while let Some(res) = background_futures.join_next().await {
        if let Err(err) = res {
            log::warn!("actions service stopped abnormally: {err}");
        }
    }

    return result;
}
