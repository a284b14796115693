use super::ReportPayload;

pub enum Event {
    AssessmentCompleted(ReportPayload),
    AssessmentFailed(anyhow::Error),
    Notice(String),
}
