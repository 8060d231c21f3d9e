/// Submitted command strings with shell-style Up/Down recall.
#[derive(Default, Debug)]
pub struct InputHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl InputHistory {
    /// Records a submission and stops navigating.
    pub fn push(&mut self, raw: &str) {
        self.entries.push(raw.to_string());
        self.cursor = None;
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_navigating(&self) -> bool {
        self.cursor.is_some()
    }

    /// Steps to an older entry, clamped at the oldest. `None` leaves the
    /// input untouched.
    pub fn recall_previous(&mut self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }

        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(current) => current.saturating_sub(1),
        };
        self.cursor = Some(index);

        return Some(self.entries[index].clone());
    }

    /// Steps to a newer entry. Past the newest, yields an empty string and
    /// stops navigating.
    pub fn recall_next(&mut self) -> Option<String> {
        let current = self.cursor?;

        let index = current + 1;
        if index >= self.entries.len() {
            self.cursor = None;
            return Some("".to_string());
        }
        self.cursor = Some(index);

        return Some(self.entries[index].clone());
    }
}
