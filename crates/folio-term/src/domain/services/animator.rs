#[cfg(test)]
#[path = "animator_test.rs"]
mod tests;

use std::collections::VecDeque;

use super::Cadence;
use crate::domain::models::Line;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing queued.
    Idle,
    /// A scheduled batch is still inside its response delay.
    Waiting,
    /// One more char of the head line became visible.
    Advanced,
    /// The cadence held this tick back.
    Hesitated,
    /// The head line was settled and left the queue.
    Settled,
}

/// Reveals queued buffer lines one char per tick, strictly in order.
///
/// The queue holds buffer indices. Only its head is ever touched, so at most
/// one line is revealing and everything queued before it is settled.
#[derive(Default)]
pub struct TypingAnimator {
    queue: VecDeque<usize>,
}

impl TypingAnimator {
    pub fn enqueue(&mut self, index: usize) {
        self.queue.push_back(index);
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Forgets every queued line. Used when the buffer is replaced.
    pub fn reset(&mut self) {
        self.queue.clear();
    }

    pub fn tick(&mut self, buffer: &mut [Line], cadence: &mut dyn Cadence) -> TickOutcome {
        let Some(&index) = self.queue.front() else {
            return TickOutcome::Idle;
        };

        let Some(line) = buffer.get_mut(index) else {
            tracing::warn!(index, "queued line is missing from the buffer");
            self.queue.pop_front();
            return TickOutcome::Settled;
        };

        if !line.is_fully_revealed() {
            if !cadence.should_advance() {
                return TickOutcome::Hesitated;
            }
            line.advance();
            return TickOutcome::Advanced;
        }

        line.settle();
        self.queue.pop_front();
        return TickOutcome::Settled;
    }
}
