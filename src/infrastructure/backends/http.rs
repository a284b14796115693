#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AssessmentBackend;
use crate::domain::models::AssessmentRequest;
use crate::domain::models::ReportPayload;

pub struct HttpBackend {
    url: String,
}

impl Default for HttpBackend {
    fn default() -> HttpBackend {
        return HttpBackend::new(&Config::get(ConfigKey::ApiURL));
    }
}

impl HttpBackend {
    pub fn new(url: &str) -> HttpBackend {
        return HttpBackend {
            url: url.trim_end_matches('/').to_string(),
        };
    }
}

#[async_trait]
impl AssessmentBackend for HttpBackend {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        let res = match reqwest::Client::new().get(&self.url).send().await {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, url = %self.url, "Assessment API is not running");
                bail!("Assessment API is not running");
            }
        };

        let status = res.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Assessment API health check failed");
            bail!(format!(
                "Assessment API health check failed with status {}",
                status.as_u16()
            ));
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn assess(&self, req: &AssessmentRequest) -> Result<ReportPayload> {
        let res = reqwest::Client::new()
            .post(format!("{url}/api/assess", url = self.url))
            .json(req)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                "Failed to make assessment request"
            );
            bail!(format!(
                "Assessment API responded with status {}",
                status.as_u16()
            ));
        }

        let body = res.json::<Value>().await?;
        tracing::debug!(body = ?body, "Assessment response");

        return ReportPayload::new(body);
    }
}
