#[cfg(test)]
#[path = "submitter_test.rs"]
mod tests;

use anyhow::Result;

use super::ReportRenderer;
use crate::domain::models::Anchor;
use crate::domain::models::AssessmentForm;
use crate::domain::models::AssessmentRequest;
use crate::domain::models::BackendBox;
use crate::domain::models::Mode;
use crate::domain::models::Page;
use crate::domain::models::ReportPayload;
use crate::domain::models::SubmissionState;

pub const SUBMISSION_ALERT: &str = "Failed to generate report. Please try again.";

#[derive(Default)]
pub struct Submitter {
    state: SubmissionState,
}

impl Submitter {
    pub fn state(&self) -> SubmissionState {
        return self.state;
    }

    pub fn is_submitting(&self) -> bool {
        return self.state == SubmissionState::Submitting;
    }

    /// Validates the form and marks the submission as in flight. Returns the
    /// request to send, or `None` when nothing should be sent.
    pub fn begin(
        &mut self,
        mode: Mode,
        form: &AssessmentForm,
        page: &mut Page,
    ) -> Option<AssessmentRequest> {
        if self.is_submitting() {
            tracing::debug!("Assessment already in flight, ignoring submission");
            return None;
        }

        let req = match form.to_request(mode) {
            Ok(req) => req,
            Err(err) => {
                tracing::debug!(error = %err, "Assessment form is incomplete");
                page.alert(&err.to_string());
                return None;
            }
        };

        self.state = SubmissionState::Submitting;
        page.submit.busy();
        tracing::info!(
            mode = %req.mode,
            dsa_skill = %req.dsa_skill,
            "Submitting assessment"
        );

        return Some(req);
    }

    /// Completes an in-flight submission. The submit control is restored on
    /// every path.
    pub fn finish(&mut self, result: Result<ReportPayload>, page: &mut Page) {
        match result {
            Ok(payload) => {
                ReportRenderer::render(&payload, &mut page.report);
                page.scroll_into_view(Anchor::Report);
            }
            Err(err) => {
                tracing::error!(error = ?err, "Assessment submission failed");
                page.alert(SUBMISSION_ALERT);
            }
        }

        page.submit.restore();
        self.state = SubmissionState::Done;
    }

    /// Runs a whole submission against the backend. Returns the payload that
    /// was rendered, if any.
    pub async fn submit(
        &mut self,
        backend: &BackendBox,
        mode: Mode,
        form: &AssessmentForm,
        page: &mut Page,
    ) -> Option<ReportPayload> {
        return self
            .submit_with_progress(backend, mode, form, page, |_| {})
            .await;
    }

    /// Same as `submit`, calling `on_accepted` once the form passed validation
    /// and right before the request is sent.
    pub async fn submit_with_progress<F>(
        &mut self,
        backend: &BackendBox,
        mode: Mode,
        form: &AssessmentForm,
        page: &mut Page,
        on_accepted: F,
    ) -> Option<ReportPayload>
    where
        F: FnOnce(&AssessmentRequest),
    {
        let req = self.begin(mode, form, page)?;
        on_accepted(&req);
        let res = backend.assess(&req).await;

        let payload = res.as_ref().ok().cloned();
        self.finish(res, page);

        return payload;
    }
}
