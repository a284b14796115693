#[cfg(test)]
#[path = "page_test.rs"]
mod tests;

use std::collections::VecDeque;

use anyhow::bail;
use anyhow::Result;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use strum::VariantNames;

pub const DEFAULT_TITLE: &str = "Assessment";
pub const SUBMIT_LABEL: &str = "Generate Report";
pub const SUBMIT_BUSY_LABEL: &str = "Generating Report...";

/// Report regions a page may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Section {
    Score,
    Strengths,
    Gaps,
    ActionPlan,
    Jobs,
    EmailDraft,
}

impl Section {
    pub fn parse(text: &str) -> Option<Section> {
        return Section::iter().find(|e| return e.to_string() == text.trim());
    }

    /// Parses a comma separated list such as `score,gaps,jobs`.
    pub fn parse_list(text: &str) -> Result<Vec<Section>> {
        let mut sections = vec![];
        for entry in text.split(',') {
            if entry.trim().is_empty() {
                continue;
            }

            if let Some(section) = Section::parse(entry) {
                if !sections.contains(&section) {
                    sections.push(section);
                }
            } else {
                bail!(format!(
                    "Unknown report section '{}'. Possible values are: {}",
                    entry.trim(),
                    Section::VARIANTS.join(", ")
                ));
            }
        }

        return Ok(sections);
    }

    pub fn all_as_string() -> String {
        return Section::VARIANTS.join(",");
    }
}

/// Scroll targets of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter)]
pub enum Anchor {
    #[default]
    Modes,
    Resume,
    Report,
}

impl Anchor {
    pub fn title(&self) -> &'static str {
        match self {
            Anchor::Modes => return "Modes",
            Anchor::Resume => return "Resume",
            Anchor::Report => return "Report",
        }
    }

    pub fn index(&self) -> usize {
        return Anchor::iter().position(|e| return e == *self).unwrap_or(0);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub enabled: bool,
}

impl Default for SubmitControl {
    fn default() -> SubmitControl {
        return SubmitControl {
            label: SUBMIT_LABEL.to_string(),
            enabled: true,
        };
    }
}

impl SubmitControl {
    pub fn busy(&mut self) {
        self.label = SUBMIT_BUSY_LABEL.to_string();
        self.enabled = false;
    }

    pub fn restore(&mut self) {
        self.label = SUBMIT_LABEL.to_string();
        self.enabled = true;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobCard {
    pub role: String,
    pub company: String,
    pub location: String,
    pub match_reason: String,
    pub email_draft: Option<String>,
}

/// Report regions of a page. A region set to `None` does not exist in the
/// layout and is never written to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportRegions {
    pub greeting: Option<String>,
    pub download_link: Option<String>,
    pub score: Option<String>,
    pub strengths: Option<Vec<String>>,
    pub gaps: Option<Vec<String>>,
    pub action_plan: Option<Vec<String>>,
    pub jobs: Option<Vec<JobCard>>,
    pub email_draft: Option<String>,
}

impl ReportRegions {
    pub fn with_sections(sections: &[Section]) -> ReportRegions {
        let mut regions = ReportRegions::default();
        for section in sections {
            match section {
                Section::Score => regions.score = Some("".to_string()),
                Section::Strengths => regions.strengths = Some(vec![]),
                Section::Gaps => regions.gaps = Some(vec![]),
                Section::ActionPlan => regions.action_plan = Some(vec![]),
                Section::Jobs => regions.jobs = Some(vec![]),
                Section::EmailDraft => regions.email_draft = Some("".to_string()),
            }
        }

        return regions;
    }

    pub fn has(&self, section: Section) -> bool {
        match section {
            Section::Score => return self.score.is_some(),
            Section::Strengths => return self.strengths.is_some(),
            Section::Gaps => return self.gaps.is_some(),
            Section::ActionPlan => return self.action_plan.is_some(),
            Section::Jobs => return self.jobs.is_some(),
            Section::EmailDraft => return self.email_draft.is_some(),
        }
    }

    /// Resolves the report download link against the API base URL when the
    /// API returned a relative path.
    pub fn download_url(&self, api_url: &str) -> Option<String> {
        let link = self.download_link.as_ref()?;
        if link.starts_with("http://") || link.starts_with("https://") {
            return Some(link.to_string());
        }

        return Some(format!(
            "{}/{}",
            api_url.trim_end_matches('/'),
            link.trim_start_matches('/')
        ));
    }
}

/// Everything the assessment flow reads from or writes to on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub mode_title: String,
    pub focus: Anchor,
    pub submit: SubmitControl,
    pub report: ReportRegions,
    alerts: VecDeque<String>,
}

impl Page {
    pub fn new(sections: &[Section]) -> Page {
        return Page {
            mode_title: DEFAULT_TITLE.to_string(),
            focus: Anchor::default(),
            submit: SubmitControl::default(),
            report: ReportRegions::with_sections(sections),
            alerts: VecDeque::new(),
        };
    }

    pub fn alert(&mut self, text: &str) {
        self.alerts.push_back(text.to_string());
    }

    pub fn current_alert(&self) -> Option<&String> {
        return self.alerts.front();
    }

    pub fn take_alert(&mut self) -> Option<String> {
        return self.alerts.pop_front();
    }

    pub fn alerts_len(&self) -> usize {
        return self.alerts.len();
    }

    pub fn scroll_into_view(&mut self, anchor: Anchor) {
        self.focus = anchor;
    }
}
