#[cfg(test)]
#[path = "form_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;

use super::AssessmentRequest;
use super::DsaSkill;
use super::Mode;

pub const VALIDATION_ALERT: &str = "Please select your DSA skill level and describe a project.";

/// Current state of the resume form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssessmentForm {
    pub dsa_skill: Option<DsaSkill>,
    pub project_description: String,
}

impl AssessmentForm {
    pub fn new(dsa_skill: Option<DsaSkill>, project_description: &str) -> AssessmentForm {
        return AssessmentForm {
            dsa_skill,
            project_description: project_description.to_string(),
        };
    }

    /// Presence check only. The description is sent exactly as typed.
    pub fn to_request(&self, mode: Mode) -> Result<AssessmentRequest> {
        let Some(dsa_skill) = self.dsa_skill else {
            bail!(VALIDATION_ALERT);
        };

        if self.project_description.trim().is_empty() {
            bail!(VALIDATION_ALERT);
        }

        return Ok(AssessmentRequest {
            mode,
            dsa_skill,
            project_description: self.project_description.to_string(),
        });
    }
}
