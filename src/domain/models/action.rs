use super::AssessmentRequest;

pub enum Action {
    Assess(AssessmentRequest),
    CopyToClipboard(String),
}
