#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use futures::StreamExt;
use tokio::time;
use tokio::time::MissedTickBehavior;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

/// Merges terminal input with the fixed-period typing tick.
pub struct EventsService {
    crossterm_events: EventStream,
    ticker: time::Interval,
}

impl EventsService {
    pub fn new(tick_interval: Duration) -> EventsService {
        let mut ticker = time::interval(tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        return EventsService {
            crossterm_events: EventStream::new(),
            ticker,
        };
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => handle_crossterm(input),
                    Some(Err(err)) => {
                        tracing::warn!(error = ?err, "failed to read terminal event");
                        None
                    }
                    None => None
                },
                _ = self.ticker.tick() => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}

pub fn handle_crossterm(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Paste(text) => {
            return Some(Event::KeyboardPaste(text));
        }
        CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
            crossterm::event::MouseEventKind::ScrollUp => {
                return Some(Event::UIScrollUp);
            }
            crossterm::event::MouseEventKind::ScrollDown => {
                return Some(Event::UIScrollDown);
            }
            _ => {
                return None;
            }
        },
        CrosstermEvent::Key(keyevent) => {
            if keyevent.kind == crossterm::event::KeyEventKind::Release {
                return None;
            }

            let key = match keyevent.code {
                crossterm::event::KeyCode::Char(c) => Key::Char(c),
                crossterm::event::KeyCode::Enter => Key::Enter,
                crossterm::event::KeyCode::Left => Key::Left,
                crossterm::event::KeyCode::Right => Key::Right,
                crossterm::event::KeyCode::Up => Key::Up,
                crossterm::event::KeyCode::Down => Key::Down,
                crossterm::event::KeyCode::Home => Key::Home,
                crossterm::event::KeyCode::End => Key::End,
                crossterm::event::KeyCode::PageUp => Key::PageUp,
                crossterm::event::KeyCode::PageDown => Key::PageDown,
                crossterm::event::KeyCode::Delete => Key::Delete,
                crossterm::event::KeyCode::Backspace => Key::Backspace,
                crossterm::event::KeyCode::Esc => Key::Esc,
                _ => return None,
            };

            let input = Input {
                key,
                ctrl: keyevent
                    .modifiers
                    .contains(crossterm::event::KeyModifiers::CONTROL),
                alt: keyevent
                    .modifiers
                    .contains(crossterm::event::KeyModifiers::ALT),
                shift: keyevent
                    .modifiers
                    .contains(crossterm::event::KeyModifiers::SHIFT),
            };
            match input {
                Input { key: Key::Up, .. } => {
                    return Some(Event::HistoryPrevious);
                }
                Input { key: Key::Down, .. } => {
                    return Some(Event::HistoryNext);
                }
                Input {
                    key: Key::PageDown, ..
                } => {
                    return Some(Event::UIScrollPageDown);
                }
                Input {
                    key: Key::PageUp, ..
                } => {
                    return Some(Event::UIScrollPageUp);
                }
                Input {
                    key: Key::Char('d'),
                    ctrl: true,
                    ..
                } => {
                    return Some(Event::UIScrollPageDown);
                }
                Input {
                    key: Key::Char('u'),
                    ctrl: true,
                    ..
                } => {
                    return Some(Event::UIScrollPageUp);
                }
                Input {
                    key: Key::Char('c'),
                    ctrl: true,
                    ..
                } => {
                    return Some(Event::KeyboardCTRLC);
                }
                Input { key: Key::Esc, .. } => {
                    return Some(Event::KeyboardEsc);
                }
                Input {
                    key: Key::Enter, ..
                } => {
                    return Some(Event::KeyboardEnter);
                }
                input => {
                    return Some(Event::KeyboardCharInput(input));
                }
            }
        }
        _ => return None,
    }
}
