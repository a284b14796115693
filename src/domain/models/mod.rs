mod action;
mod assessment;
mod backend;
mod event;
mod form;
mod loading;
mod mode;
mod page;
mod skill;
mod submission;
mod textarea;

pub use action::*;
pub use assessment::*;
pub use backend::*;
pub use event::*;
pub use form::*;
pub use loading::*;
pub use mode::*;
pub use page::*;
pub use skill::*;
pub use submission::*;
pub use textarea::*;
