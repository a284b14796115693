#[cfg(test)]
#[path = "mode_selector_test.rs"]
mod tests;

use crate::domain::models::Anchor;
use crate::domain::models::Mode;
use crate::domain::models::Page;

pub struct ModeSelector {}

impl ModeSelector {
    /// Applies a mode picked by the user and returns the selection to use for
    /// the next submission. Unknown identifiers keep both the current
    /// selection and the heading.
    pub fn select(identifier: &str, current: Mode, page: &mut Page) -> Mode {
        tracing::debug!(mode = identifier, "Selected mode");

        let mut selection = current;
        if let Some(mode) = Mode::parse(identifier) {
            page.mode_title = mode.title().to_string();
            selection = mode;
        } else {
            tracing::warn!(mode = identifier, "Ignoring unknown assessment mode");
        }

        page.scroll_into_view(Anchor::Resume);

        return selection;
    }
}
