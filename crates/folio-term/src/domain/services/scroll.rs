/// Vertical scroll over the rendered buffer.
///
/// Follows the bottom until the user scrolls up, and picks following back up
/// once they return to the bottom.
#[derive(Debug)]
pub struct Scroll {
    position: usize,
    content_height: usize,
    viewport_height: usize,
    follow: bool,
}

impl Default for Scroll {
    fn default() -> Scroll {
        return Scroll {
            position: 0,
            content_height: 0,
            viewport_height: 0,
            follow: true,
        };
    }
}

impl Scroll {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }

    fn max_position(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn set_state(&mut self, content_height: usize, viewport_height: usize) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;

        if self.follow {
            self.position = self.max_position();
        } else {
            self.position = self.position.min(self.max_position());
        }
    }

    pub fn up(&mut self, lines: usize) {
        self.position = self.position.saturating_sub(lines);
        self.follow = self.position >= self.max_position();
    }

    pub fn down(&mut self, lines: usize) {
        self.position = (self.position + lines).min(self.max_position());
        self.follow = self.position >= self.max_position();
    }

    pub fn page_up(&mut self) {
        self.up(self.viewport_height.max(1));
    }

    pub fn page_down(&mut self) {
        self.down(self.viewport_height.max(1));
    }

    pub fn last(&mut self) {
        self.follow = true;
        self.position = self.max_position();
    }
}
