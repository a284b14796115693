use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub struct TextArea {}

impl<'a> TextArea {
    /// Free text input for the project description.
    pub fn project_description(focused: bool) -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_block(TextArea::block(focused));

        return textarea;
    }

    pub fn set_focus(textarea: &mut tui_textarea::TextArea<'a>, focused: bool) {
        textarea.set_block(TextArea::block(focused));
    }

    fn block(focused: bool) -> Block<'a> {
        let mut border_style = Style::default();
        if focused {
            border_style = border_style.fg(Color::Yellow);
        }

        return Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("Project description")
            .padding(Padding::new(1, 1, 0, 0));
    }
}
