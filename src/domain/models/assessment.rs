#[cfg(test)]
#[path = "assessment_test.rs"]
mod tests;

use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use serde::Deserialize as _;
use serde::Deserializer;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use serde_json::Value;

use super::DsaSkill;
use super::Mode;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub mode: Mode,
    pub dsa_skill: DsaSkill,
    pub project_description: String,
}

/// Text fields of a job record may be missing, null or numeric (`"match": 85`).
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => return Ok("".to_string()),
        Value::String(text) => return Ok(text),
        Value::Number(num) => return Ok(num.to_string()),
        Value::Bool(flag) => return Ok(flag.to_string()),
        other => {
            return Err(serde::de::Error::custom(format!(
                "expected text, found {other}"
            )));
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecommendation {
    #[serde(default, deserialize_with = "lenient_text")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: String,
    #[serde(rename = "match", default, deserialize_with = "lenient_text")]
    pub match_reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_draft: Option<String>,
}

/// Report body returned by the assessment API.
///
/// The body is kept as raw JSON and every field is decoded on access, so a
/// malformed field only affects the region that displays it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportPayload(Value);

impl ReportPayload {
    pub fn new(body: Value) -> Result<ReportPayload> {
        if !body.is_object() {
            bail!("Assessment response is not a JSON object");
        }

        return Ok(ReportPayload(body));
    }

    pub fn as_json(&self) -> &Value {
        return &self.0;
    }

    fn field(&self, key: &str) -> Result<&Value> {
        return self
            .0
            .get(key)
            .ok_or_else(|| return anyhow!("Field '{key}' is missing from the report"));
    }

    pub fn readiness_score(&self) -> Result<String> {
        match self.field("readiness_score")? {
            Value::Number(score) => return Ok(score.to_string()),
            Value::String(score) => return Ok(score.to_string()),
            other => bail!("Field 'readiness_score' is not a number: {other}"),
        }
    }

    pub fn strengths(&self) -> Result<Vec<String>> {
        return self.string_list("strengths");
    }

    pub fn gaps(&self) -> Result<Vec<String>> {
        return self.string_list("gaps");
    }

    pub fn action_plan(&self) -> Result<Vec<String>> {
        return self.string_list("action_plan");
    }

    /// `None` when the API omitted the field entirely. Records are decoded one
    /// by one and a record that cannot be read is skipped.
    pub fn job_recommendations(&self) -> Option<Result<Vec<JobRecommendation>>> {
        let jobs = self.0.get("job_recommendations")?;
        let Some(records) = jobs.as_array() else {
            return Some(Err(anyhow!(
                "Field 'job_recommendations' is not a list: {jobs}"
            )));
        };

        let jobs = records
            .iter()
            .enumerate()
            .filter_map(|(idx, record)| {
                if !record.is_object() {
                    tracing::warn!(idx, "Skipping job recommendation that is not an object");
                    return None;
                }

                match serde_json::from_value::<JobRecommendation>(record.clone()) {
                    Ok(job) => return Some(job),
                    Err(err) => {
                        tracing::warn!(idx, error = %err, "Skipping malformed job recommendation");
                        return None;
                    }
                }
            })
            .collect::<Vec<JobRecommendation>>();

        return Some(Ok(jobs));
    }

    pub fn email_draft(&self) -> Result<String> {
        match self.field("email_draft")? {
            Value::String(draft) => return Ok(draft.to_string()),
            other => bail!("Field 'email_draft' is not a string: {other}"),
        }
    }

    pub fn candidate_name(&self) -> Option<String> {
        return self.optional_string("candidate_name");
    }

    pub fn pdf_url(&self) -> Option<String> {
        return self.optional_string("pdf_url");
    }

    fn optional_string(&self, key: &str) -> Option<String> {
        return self
            .0
            .get(key)
            .and_then(|e| return e.as_str())
            .filter(|e| return !e.trim().is_empty())
            .map(|e| return e.to_string());
    }

    fn string_list(&self, key: &str) -> Result<Vec<String>> {
        let items = self
            .field(key)?
            .as_array()
            .ok_or_else(|| return anyhow!("Field '{key}' is not a list"))?;

        return items
            .iter()
            .map(|item| {
                match item {
                    Value::String(text) => return Ok(text.to_string()),
                    Value::Number(num) => return Ok(num.to_string()),
                    other => bail!("Field '{key}' has a non-text entry: {other}"),
                }
            })
            .collect();
    }
}
