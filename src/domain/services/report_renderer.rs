#[cfg(test)]
#[path = "report_renderer_test.rs"]
mod tests;

use anyhow::Result;

use crate::domain::models::JobCard;
use crate::domain::models::ReportPayload;
use crate::domain::models::ReportRegions;
use crate::domain::models::Section;

fn update_region<T>(section: Section, region: &mut Option<T>, decoded: Result<T>) -> bool {
    let Some(target) = region.as_mut() else {
        tracing::debug!(section = %section, "Report region is not part of the layout");
        return false;
    };

    match decoded {
        Ok(value) => {
            *target = value;
            return true;
        }
        Err(err) => {
            tracing::warn!(section = %section, error = ?err, "Skipping report region");
            return false;
        }
    }
}

pub struct ReportRenderer {}

impl ReportRenderer {
    /// Writes every region of the report independently. A region that is
    /// absent from the layout, or whose field fails to decode, is skipped
    /// without affecting the others. Returns the number of regions written.
    pub fn render(payload: &ReportPayload, regions: &mut ReportRegions) -> usize {
        let mut written = 0;

        let score = payload
            .readiness_score()
            .map(|score| return format!("{score}%"));
        if update_region(Section::Score, &mut regions.score, score) {
            written += 1;
        }

        if update_region(Section::Strengths, &mut regions.strengths, payload.strengths()) {
            written += 1;
        }

        if update_region(Section::Gaps, &mut regions.gaps, payload.gaps()) {
            written += 1;
        }

        if update_region(
            Section::ActionPlan,
            &mut regions.action_plan,
            payload.action_plan(),
        ) {
            written += 1;
        }

        if let Some(jobs) = payload.job_recommendations() {
            let cards = jobs.map(|jobs| {
                return jobs
                    .into_iter()
                    .map(|job| {
                        return JobCard {
                            role: job.role,
                            company: job.company,
                            location: job.location,
                            match_reason: job.match_reason,
                            email_draft: job.email_draft,
                        };
                    })
                    .collect::<Vec<JobCard>>();
            });

            if update_region(Section::Jobs, &mut regions.jobs, cards) {
                written += 1;
            }
        }

        if update_region(
            Section::EmailDraft,
            &mut regions.email_draft,
            payload.email_draft(),
        ) {
            written += 1;
        }

        regions.greeting = payload.candidate_name();
        regions.download_link = payload.pdf_url();

        tracing::debug!(written, "Rendered report");

        return written;
    }
}
