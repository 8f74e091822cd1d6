use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to score a profile against a job description
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompatibilityRequest {
    #[validate(length(min = 1, max = 39))]
    #[serde(alias = "username")]
    pub handle: String,
    #[validate(length(max = 20000))]
    #[serde(alias = "job_description", rename = "jobDescription", default)]
    pub job_description: String,
}
