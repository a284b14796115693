pub mod actions;
mod app_state;
pub mod clipboard;
mod mode_selector;
mod report_renderer;
mod report_view;
mod scroll;
mod submitter;

pub use app_state::*;
pub use mode_selector::*;
pub use report_renderer::*;
pub use report_view::*;
pub use scroll::*;
pub use submitter::*;
