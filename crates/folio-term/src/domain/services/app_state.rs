use anyhow::Result;
use ratatui::prelude::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use tokio::sync::mpsc;
use tui_textarea::CursorMove;
use tui_textarea::TextArea;

use super::CadenceBox;
use super::Dispatch;
use super::Scroll;
use super::SessionOptions;
use super::TerminalSession;
use super::TickOutcome;
use crate::domain::models::Action;
use crate::domain::models::Event;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

pub const TYPING_CURSOR: &str = "█";

/// Wraps buffer rows the way they are drawn, so measuring and rendering agree.
pub fn wrapped_buffer(lines: Vec<Line<'_>>) -> Paragraph<'_> {
    return Paragraph::new(lines).wrap(Wrap { trim: false });
}

pub struct AppStateProps {
    pub cadence: CadenceBox,
    pub session_options: SessionOptions,
    pub title: String,
}

pub struct AppState<'a> {
    pub last_known_height: usize,
    pub last_known_width: usize,
    pub scroll: Scroll,
    pub session: TerminalSession,
    pub textarea: TextArea<'a>,
    pub title: String,
}

fn textarea_with(text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text.to_string()]);
    textarea.move_cursor(CursorMove::End);
    return textarea;
}

impl<'a> AppState<'a> {
    pub fn new(props: AppStateProps) -> AppState<'a> {
        let mut app_state = AppState {
            last_known_height: 0,
            last_known_width: 0,
            scroll: Scroll::default(),
            session: TerminalSession::new(props.session_options, props.cadence),
            textarea: textarea_with(""),
            title: props.title,
        };

        app_state.sync_dependants();
        return app_state;
    }

    /// Applies one event. Returns true when the terminal should close.
    pub fn handle_event(
        &mut self,
        event: Event,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        match event {
            Event::KeyboardCTRLC | Event::KeyboardEsc => {
                return Ok(true);
            }
            Event::KeyboardEnter => {
                self.submit(tx);
            }
            Event::HistoryPrevious => {
                if let Some(entry) = self.session.recall_previous() {
                    self.textarea = textarea_with(&entry);
                }
            }
            Event::HistoryNext => {
                if let Some(entry) = self.session.recall_next() {
                    self.textarea = textarea_with(&entry);
                }
            }
            Event::KeyboardCharInput(input) => {
                if !self.session.is_processing() {
                    self.textarea.input(input);
                }
            }
            Event::KeyboardPaste(text) => {
                if !self.session.is_processing() {
                    self.textarea.insert_str(text.replace(['\r', '\n'], " "));
                }
            }
            Event::UITick => {
                let was_processing = self.session.is_processing();
                if self.session.tick() != TickOutcome::Idle || was_processing {
                    self.sync_dependants();
                }
            }
            Event::UIScrollDown => {
                self.scroll.down(1);
            }
            Event::UIScrollUp => {
                self.scroll.up(1);
            }
            Event::UIScrollPageDown => {
                self.scroll.page_down();
            }
            Event::UIScrollPageUp => {
                self.scroll.page_up();
            }
        }

        return Ok(false);
    }

    fn submit(&mut self, tx: &mpsc::UnboundedSender<Action>) {
        let raw = self.textarea.lines().join(" ");

        match self.session.dispatch(&raw) {
            Dispatch::Busy => {
                return;
            }
            Dispatch::Done => {}
            Dispatch::Open(link) => {
                if let Err(err) = tx.send(Action::OpenLink(link)) {
                    tracing::warn!(link = %link, error = %err, "link request dropped");
                }
            }
        }

        self.textarea = textarea_with("");
        self.sync_dependants();
        self.scroll.last();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width.into();
        self.last_known_height = rect.height.into();
        self.sync_dependants();
    }

    /// Rows the buffer takes once wrapped to the last known width, counting
    /// the typing cursor.
    pub fn content_height(&self) -> usize {
        let width = u16::try_from(self.last_known_width.max(1)).unwrap_or(u16::MAX);
        let cursor = self.cursor_line();

        let lines = self
            .session
            .lines()
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                if cursor == Some(idx) {
                    return Line::from(vec![Span::raw(line.visible()), Span::raw(TYPING_CURSOR)]);
                }
                Line::raw(line.visible())
            })
            .collect();

        return wrapped_buffer(lines).line_count(width);
    }

    /// Index of the line currently being typed, if any.
    pub fn cursor_line(&self) -> Option<usize> {
        if !self.session.is_processing() {
            return None;
        }

        return self
            .session
            .lines()
            .iter()
            .position(|line| line.is_revealing());
    }

    fn sync_dependants(&mut self) {
        self.scroll
            .set_state(self.content_height(), self.last_known_height);
    }
}
