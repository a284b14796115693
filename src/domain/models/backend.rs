use anyhow::Result;
use async_trait::async_trait;

use super::AssessmentRequest;
use super::ReportPayload;

pub type BackendBox = Box<dyn AssessmentBackend + Send + Sync>;

#[async_trait]
pub trait AssessmentBackend {
    /// Used at startup to warn early when the API cannot be reached.
    async fn health_check(&self) -> Result<()>;

    /// Performs exactly one request for the given submission. Any transport
    /// failure, non-success status, or unparsable body is an error.
    async fn assess(&self, req: &AssessmentRequest) -> Result<ReportPayload>;
}
