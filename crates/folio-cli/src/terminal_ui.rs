use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_term::application::ui::start_loop;
use folio_term::configuration::{Config, ConfigKey};
use folio_term::domain::models::Action;
use folio_term::domain::services::{
    AppStateProps, CadenceBox, JitterCadence, SessionOptions, SteadyCadence,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

fn cadence(skip_percent: u32) -> CadenceBox {
    if skip_percent == 0 {
        return Box::new(SteadyCadence);
    }

    return Box::new(JitterCadence::from_clock(skip_percent));
}

/// Reads the loaded configuration into the UI props and the tick interval.
fn app_state_props() -> Result<(AppStateProps, Duration)> {
    let tick_interval = Duration::from_millis(Config::get_number(ConfigKey::TickInterval)?);
    let response_delay = Duration::from_millis(Config::get_number(ConfigKey::ResponseDelay)?);
    let skip_percent = u32::try_from(Config::get_number(ConfigKey::SkipPercent)?)?;

    let props = AppStateProps {
        cadence: cadence(skip_percent),
        session_options: SessionOptions {
            prompt: Config::get(ConfigKey::Prompt),
            response_delay_ticks: SessionOptions::delay_in_ticks(response_delay, tick_interval),
        },
        title: Config::get(ConfigKey::Title),
    };

    return Ok((props, tick_interval));
}

pub async fn run(tx: mpsc::UnboundedSender<Action>) -> Result<()> {
    let (app_state_props, tick_interval) = app_state_props()?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let result = start_loop(&mut terminal, app_state_props, tx, tick_interval).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;

    let _ = crossterm::execute!(io::stdout(), cursor::Show);

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_follow_loaded_config() {
        Config::set(ConfigKey::TickInterval, "30");
        Config::set(ConfigKey::ResponseDelay, "100");
        Config::set(ConfigKey::SkipPercent, "0");
        Config::set(ConfigKey::Prompt, "guest@folio:~$");
        Config::set(ConfigKey::Title, "folio");

        let (props, tick_interval) = app_state_props().unwrap();
        assert_eq!(tick_interval, Duration::from_millis(30));
        assert_eq!(props.session_options.prompt, "guest@folio:~$");
        assert_eq!(props.session_options.response_delay_ticks, 4);
        assert_eq!(props.title, "folio");

        Config::set(ConfigKey::TickInterval, "slow");
        assert!(app_state_props().is_err());
    }
}
