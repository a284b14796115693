#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use ratatui::prelude::Rect;
use strum::IntoEnumIterator;

use super::ModeSelector;
use super::ReportView;
use super::Scroll;
use super::Submitter;
use crate::domain::models::Anchor;
use crate::domain::models::AssessmentForm;
use crate::domain::models::AssessmentRequest;
use crate::domain::models::BackendBox;
use crate::domain::models::DsaSkill;
use crate::domain::models::Event;
use crate::domain::models::Mode;
use crate::domain::models::Page;
use crate::domain::models::Section;

/// Focus ring walked with Tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    Modes,
    Skill,
    Description,
    Submit,
    Report,
}

impl FocusTarget {
    fn anchor(&self) -> Anchor {
        match self {
            FocusTarget::Modes => return Anchor::Modes,
            FocusTarget::Skill | FocusTarget::Description | FocusTarget::Submit => {
                return Anchor::Resume;
            }
            FocusTarget::Report => return Anchor::Report,
        }
    }

    fn from_anchor(anchor: Anchor) -> FocusTarget {
        match anchor {
            Anchor::Modes => return FocusTarget::Modes,
            Anchor::Resume => return FocusTarget::Skill,
            Anchor::Report => return FocusTarget::Report,
        }
    }

    fn next(&self) -> FocusTarget {
        match self {
            FocusTarget::Modes => return FocusTarget::Skill,
            FocusTarget::Skill => return FocusTarget::Description,
            FocusTarget::Description => return FocusTarget::Submit,
            FocusTarget::Submit => return FocusTarget::Report,
            FocusTarget::Report => return FocusTarget::Modes,
        }
    }
}

fn move_cursor(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    let moved = cursor as isize + delta;
    return moved.clamp(0, len as isize - 1) as usize;
}

pub struct AppState {
    pub api_url: String,
    pub form: AssessmentForm,
    pub focus: FocusTarget,
    pub has_report: bool,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub mode_cursor: usize,
    pub notice: Option<String>,
    pub page: Page,
    pub scroll: Scroll,
    pub selection: Mode,
    pub skill_cursor: usize,
    pub submitter: Submitter,
}

impl AppState {
    pub fn new(api_url: &str, selection: Mode, sections: &[Section]) -> AppState {
        return AppState {
            api_url: api_url.to_string(),
            form: AssessmentForm::default(),
            focus: FocusTarget::Modes,
            has_report: false,
            last_known_height: 0,
            last_known_width: 0,
            mode_cursor: Mode::iter().position(|e| return e == selection).unwrap_or(0),
            notice: None,
            page: Page::new(sections),
            scroll: Scroll::default(),
            selection,
            skill_cursor: 0,
            submitter: Submitter::default(),
        };
    }

    pub async fn check_backend(&mut self, backend: &BackendBox) {
        if let Err(err) = backend.health_check().await {
            self.page.alert(&format!(
                "Hey, it looks like the assessment API at {} isn't reachable. You can still fill in the form, but submitting will fail until it is running.\n\nError: {err}",
                self.api_url
            ));
        }
    }

    pub fn is_waiting(&self) -> bool {
        return self.submitter.is_submitting();
    }

    pub fn select_mode(&mut self, identifier: &str) {
        self.selection = ModeSelector::select(identifier, self.selection, &mut self.page);
        self.mode_cursor = Mode::iter()
            .position(|e| return e == self.selection)
            .unwrap_or(self.mode_cursor);
        self.focus = FocusTarget::from_anchor(self.page.focus);
    }

    pub fn select_mode_at_cursor(&mut self) {
        if let Some(mode) = Mode::iter().nth(self.mode_cursor) {
            self.select_mode(&mode.to_string());
        }
    }

    pub fn move_mode_cursor(&mut self, delta: isize) {
        self.mode_cursor = move_cursor(self.mode_cursor, delta, Mode::iter().count());
    }

    pub fn move_skill_cursor(&mut self, delta: isize) {
        self.skill_cursor = move_cursor(self.skill_cursor, delta, DsaSkill::iter().count());
    }

    pub fn choose_skill_at_cursor(&mut self) {
        self.form.dsa_skill = DsaSkill::iter().nth(self.skill_cursor);
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn set_focus(&mut self, focus: FocusTarget) {
        self.focus = focus;
        self.page.scroll_into_view(focus.anchor());
    }

    /// Starts a submission with the description currently typed in. Returns
    /// the request the worker should send.
    pub fn submit(&mut self, description: &str) -> Option<AssessmentRequest> {
        self.notice = None;
        self.form.project_description = description.to_string();

        return self
            .submitter
            .begin(self.selection, &self.form, &mut self.page);
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::AssessmentCompleted(payload) => {
                self.submitter.finish(Ok(payload), &mut self.page);
                self.has_report = true;
                self.scroll.top();
                self.sync_report();
            }
            Event::AssessmentFailed(err) => {
                self.submitter.finish(Err(err), &mut self.page);
            }
            Event::Notice(text) => {
                self.notice = Some(text);
            }
        }

        self.focus = match self.page.focus {
            Anchor::Report => FocusTarget::Report,
            _ => self.focus,
        };
    }

    pub fn dismiss_alert(&mut self) {
        self.page.take_alert();
    }

    pub fn email_draft(&self) -> Option<String> {
        return self
            .page
            .report
            .email_draft
            .as_ref()
            .filter(|e| return !e.is_empty())
            .map(|e| return e.to_string());
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_report();
    }

    fn sync_report(&mut self) {
        let height = ReportView::new(&self.page.report, &self.api_url)
            .wrapped_height(self.last_known_width);
        self.scroll.set_state(height, self.last_known_height);
    }
}
