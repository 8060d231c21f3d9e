#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::time::Duration;

use super::commands::not_found_lines;
use super::content;
use super::CadenceBox;
use super::CommandRegistry;
use super::InputHistory;
use super::Lookup;
use super::TickOutcome;
use super::TypingAnimator;
use crate::domain::models::CommandOutcome;
use crate::domain::models::Line;
use crate::domain::models::LineStyle;
use crate::domain::models::Link;
use crate::domain::models::OutputLine;

pub const DEFAULT_PROMPT: &str = "XdpSam@Portfolio:~$";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    pub prompt: String,
    /// Ticks between accepting a command and the first char of its output.
    pub response_delay_ticks: u32,
}

impl Default for SessionOptions {
    fn default() -> SessionOptions {
        return SessionOptions {
            prompt: DEFAULT_PROMPT.to_string(),
            response_delay_ticks: 4,
        };
    }
}

impl SessionOptions {
    /// Converts a wall-clock delay to whole ticks, rounding up.
    pub fn delay_in_ticks(delay: Duration, tick_interval: Duration) -> u32 {
        let tick = tick_interval.as_millis().max(1);
        let ticks = delay.as_millis().div_ceil(tick);
        return u32::try_from(ticks).unwrap_or(u32::MAX);
    }
}

/// What a submission did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Rejected because output is still being typed. Nothing changed.
    Busy,
    Done,
    /// Accepted; the caller should open this link.
    Open(Link),
}

struct Scheduled {
    lines: Vec<OutputLine>,
    remaining_ticks: u32,
}

/// One terminal: its buffer, input history and typing state.
pub struct TerminalSession {
    animator: TypingAnimator,
    buffer: Vec<Line>,
    cadence: CadenceBox,
    history: InputHistory,
    options: SessionOptions,
    processing: bool,
    registry: CommandRegistry,
    scheduled: Option<Scheduled>,
}

impl TerminalSession {
    pub fn new(options: SessionOptions, cadence: CadenceBox) -> TerminalSession {
        let buffer = content::GREETING
            .iter()
            .map(|text| Line::settled(text, LineStyle::Plain))
            .collect();

        return TerminalSession {
            animator: TypingAnimator::default(),
            buffer,
            cadence,
            history: InputHistory::default(),
            options,
            processing: false,
            registry: CommandRegistry::default(),
            scheduled: None,
        };
    }

    pub fn lines(&self) -> &[Line] {
        &self.buffer
    }

    pub fn history(&self) -> &InputHistory {
        &self.history
    }

    pub fn prompt(&self) -> &str {
        &self.options.prompt
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn dispatch(&mut self, raw: &str) -> Dispatch {
        if self.processing {
            tracing::debug!(raw, "input rejected while processing");
            return Dispatch::Busy;
        }

        self.buffer.push(Line::settled(
            &format!("{} {}", self.options.prompt, raw),
            LineStyle::Prompt,
        ));
        self.history.push(raw);

        match self.registry.lookup(raw) {
            Lookup::Empty => {
                return Dispatch::Done;
            }
            Lookup::Unknown => {
                tracing::debug!(raw, "unknown command");
                self.schedule(not_found_lines(raw));
                return Dispatch::Done;
            }
            Lookup::Found(name, outcome) => {
                tracing::debug!(command = %name, "dispatching");
                match outcome {
                    CommandOutcome::Output(lines) => {
                        self.schedule(lines);
                        return Dispatch::Done;
                    }
                    CommandOutcome::Effect { link, confirmation } => {
                        self.schedule(vec![confirmation]);
                        return Dispatch::Open(link);
                    }
                    CommandOutcome::Clear => {
                        self.clear();
                        return Dispatch::Done;
                    }
                }
            }
        }
    }

    pub fn recall_previous(&mut self) -> Option<String> {
        if self.processing {
            return None;
        }

        self.history.recall_previous()
    }

    pub fn recall_next(&mut self) -> Option<String> {
        if self.processing {
            return None;
        }

        self.history.recall_next()
    }

    pub fn tick(&mut self) -> TickOutcome {
        if let Some(scheduled) = self.scheduled.as_mut() {
            if scheduled.remaining_ticks > 0 {
                scheduled.remaining_ticks -= 1;
                return TickOutcome::Waiting;
            }
        }

        if let Some(scheduled) = self.scheduled.take() {
            self.enqueue(scheduled.lines);
        }

        let outcome = self.animator.tick(&mut self.buffer, self.cadence.as_mut());
        if outcome == TickOutcome::Idle && self.processing {
            self.processing = false;
        }

        return outcome;
    }

    fn schedule(&mut self, lines: Vec<OutputLine>) {
        if lines.is_empty() {
            return;
        }

        self.processing = true;
        self.scheduled = Some(Scheduled {
            lines,
            remaining_ticks: self.options.response_delay_ticks,
        });
    }

    fn enqueue(&mut self, lines: Vec<OutputLine>) {
        for line in lines {
            self.buffer.push(Line::pending(line));
            self.animator.enqueue(self.buffer.len() - 1);
        }
    }

    fn clear(&mut self) {
        self.animator.reset();
        self.scheduled = None;
        self.buffer.clear();
        self.processing = true;
        self.enqueue(
            content::CLEARED
                .iter()
                .map(|text| OutputLine::new(text))
                .collect(),
        );
    }
}
