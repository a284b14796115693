#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

use ratatui::widgets::ScrollbarState;

const PAGE_SIZE: u16 = 10;

/// Vertical scroll position of the report section.
#[derive(Default)]
pub struct Scroll {
    content_length: u16,
    viewport_length: u16,
    pub position: u16,
    pub scrollbar_state: ScrollbarState,
}

impl Scroll {
    fn max_position(&self) -> u16 {
        return self.content_length.saturating_sub(self.viewport_length);
    }

    fn sync_scrollbar(&mut self) {
        self.scrollbar_state = self.scrollbar_state.position(self.position);
    }

    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
        self.sync_scrollbar();
    }

    pub fn up_page(&mut self) {
        self.position = self.position.saturating_sub(PAGE_SIZE);
        self.sync_scrollbar();
    }

    pub fn down(&mut self) {
        self.position = self.position.saturating_add(1).min(self.max_position());
        self.sync_scrollbar();
    }

    pub fn down_page(&mut self) {
        self.position = self
            .position
            .saturating_add(PAGE_SIZE)
            .min(self.max_position());
        self.sync_scrollbar();
    }

    pub fn top(&mut self) {
        self.position = 0;
        self.sync_scrollbar();
    }

    pub fn set_state(&mut self, content_length: u16, viewport_length: u16) {
        self.content_length = content_length;
        self.viewport_length = viewport_length;
        self.position = self.position.min(self.max_position());
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(content_length)
            .viewport_content_length(viewport_length)
            .position(self.position);
    }
}
