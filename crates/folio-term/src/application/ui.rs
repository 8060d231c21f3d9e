use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Paragraph;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::LineStyle;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;
use crate::domain::services::TYPING_CURSOR;
use crate::domain::services::wrapped_buffer;

const SPINNER: &str = "⟳";

fn line_color(style: LineStyle) -> Color {
    match style {
        LineStyle::Plain => Color::White,
        LineStyle::Prompt => Color::Cyan,
        LineStyle::Command => Color::Green,
    }
}

fn header(title: &str) -> ratatui::text::Line<'static> {
    return ratatui::text::Line::from(vec![
        Span::raw(" "),
        Span::styled("●", Style::default().fg(Color::Red)),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(Color::Green)),
        Span::raw(" "),
        Span::styled(title.to_string(), Style::default().fg(Color::Gray)),
        Span::raw(" "),
    ]);
}

fn buffer_lines<'a>(app_state: &'a AppState) -> Vec<ratatui::text::Line<'a>> {
    let cursor_line = app_state.cursor_line();

    return app_state
        .session
        .lines()
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                line.visible(),
                Style::default().fg(line_color(line.style())),
            )];
            if cursor_line == Some(idx) {
                spans.push(Span::styled(TYPING_CURSOR, Style::default().fg(Color::Green)));
            }
            ratatui::text::Line::from(spans)
        })
        .collect();
}

pub fn draw(frame: &mut Frame, app_state: &mut AppState) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(header(&app_state.title));
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    app_state.set_rect(layout[0]);

    let scroll_y = u16::try_from(app_state.scroll.position()).unwrap_or(u16::MAX);
    frame.render_widget(
        wrapped_buffer(buffer_lines(app_state)).scroll((scroll_y, 0)),
        layout[0],
    );

    let prompt = app_state.session.prompt().to_string();
    let prompt_width = u16::try_from(prompt.chars().count() + 1).unwrap_or(u16::MAX);
    let input_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(prompt_width),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(layout[1]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            prompt,
            Style::default().fg(line_color(LineStyle::Prompt)),
        )),
        input_layout[0],
    );

    let processing = app_state.session.is_processing();
    let textarea = &mut app_state.textarea;
    textarea.set_style(Style::default().fg(line_color(LineStyle::Command)));
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
    if processing {
        textarea.set_placeholder_text("Processing...");
        textarea.set_cursor_style(Style::default());
    } else {
        textarea.set_placeholder_text("Type a command...");
        textarea.set_cursor_style(Style::default().bg(Color::Green));
    }
    frame.render_widget(&*textarea, input_layout[1]);

    if processing {
        frame.render_widget(
            Paragraph::new(Span::styled(SPINNER, Style::default().fg(Color::Yellow))),
            input_layout[2],
        );
    }
}

pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state_props: AppStateProps,
    tx: mpsc::UnboundedSender<Action>,
    tick_interval: Duration,
) -> Result<()> {
    let mut app_state = AppState::new(app_state_props);
    let mut events = EventsService::new(tick_interval);
    tracing::info!(tick_interval = ?tick_interval, "terminal loop started");

    loop {
        terminal.draw(|frame| draw(frame, &mut app_state))?;

        let event = events.next().await?;
        if app_state.handle_event(event, &tx)? {
            break;
        }
    }

    tracing::info!(
        commands = app_state.session.history().entries().len(),
        "terminal loop stopped"
    );
    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste,
        cursor::Show
    );
}
