#[cfg(test)]
#[path = "line_test.rs"]
mod tests;

use strum_macros::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum LineStyle {
    #[default]
    Plain,
    Prompt,
    Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum RevealState {
    #[default]
    Pending,
    Revealing,
    Settled,
}

/// One entry of a command's canonical output.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct OutputLine {
    pub text: String,
    pub style: LineStyle,
}

impl OutputLine {
    pub fn new(text: &str) -> OutputLine {
        return OutputLine {
            text: text.to_string(),
            style: LineStyle::Plain,
        };
    }
}

/// A line in the session buffer with its own reveal progress.
///
/// `revealed` counts chars, not bytes, so multi-byte glyphs are revealed
/// whole.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    text: String,
    style: LineStyle,
    revealed: usize,
    len: usize,
    state: RevealState,
}

impl Line {
    /// A line that is shown in full immediately.
    pub fn settled(text: &str, style: LineStyle) -> Line {
        let len = text.chars().count();
        return Line {
            text: text.to_string(),
            style,
            revealed: len,
            len,
            state: RevealState::Settled,
        };
    }

    /// A line waiting for the typing animator.
    pub fn pending(output: OutputLine) -> Line {
        let len = output.text.chars().count();
        return Line {
            text: output.text,
            style: output.style,
            revealed: 0,
            len,
            state: RevealState::Pending,
        };
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> LineStyle {
        self.style
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_settled(&self) -> bool {
        self.state == RevealState::Settled
    }

    pub fn is_revealing(&self) -> bool {
        !self.is_settled() && self.revealed < self.len
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.revealed == self.len
    }

    /// The prefix of the text revealed so far.
    pub fn visible(&self) -> &str {
        if self.revealed >= self.len {
            return &self.text;
        }

        match self.text.char_indices().nth(self.revealed) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }

    /// Reveals exactly one more char. Returns false when there was nothing
    /// left to reveal or the line is already settled.
    pub(crate) fn advance(&mut self) -> bool {
        if self.is_settled() || self.revealed >= self.len {
            return false;
        }

        self.state = RevealState::Revealing;
        self.revealed += 1;
        return true;
    }

    pub(crate) fn settle(&mut self) {
        self.revealed = self.len;
        self.state = RevealState::Settled;
    }
}
