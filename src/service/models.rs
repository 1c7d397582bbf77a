use crate::common::{ResponseSnafu, Result};

pub const JOB_STATUS_RUNNING: &str = "RUNNING";
pub const JOB_STATUS_COMPLETED: &str = "COMPLETED";
pub const JOB_STATUS_ERROR: &str = "ERROR";

/// Handle for a provider-side asynchronous job. Every mutation returns one;
/// polling the callback URL is left to the caller.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct AsyncJob {
    #[serde(rename = "jobId")]
    pub job_id: String,
    #[serde(rename = "callbackUrl")]
    pub callback_url: String,
    pub status: String,
    pub error: Option<JobError>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct JobError {
    pub code: usize,
    pub message: String,
    pub details: Option<String>,
}

impl AsyncJob {
    pub fn is_complete(&self) -> bool {
        return self.status == JOB_STATUS_COMPLETED;
    }

    pub fn has_failed(&self) -> bool {
        return self.status == JOB_STATUS_ERROR || self.error.is_some();
    }

    /// Surfaces an embedded job error as a response error.
    pub fn ensure_success(self) -> Result<Self> {
        if let Some(err) = &self.error {
            return ResponseSnafu {
                message: format!("Job {} failed: {} {}", self.job_id, err.code, err.message),
            }
            .fail();
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    #[test]
    fn deserializes_provider_job_payload() {
        let job: AsyncJob = serde_json::from_value(serde_json::json!({
            "request": "{\"recordsList\": {}}",
            "status": "RUNNING",
            "jobId": "852a1e4a-3be9-4c0f-b8d1-a06cbbb2b4a7",
            "callbackUrl": "https://dns.api.example.com/v1.0/123456/status/852a1e4a"
        }))
        .unwrap();

        assert_eq!(job.job_id, "852a1e4a-3be9-4c0f-b8d1-a06cbbb2b4a7");
        assert_eq!(job.status, JOB_STATUS_RUNNING);
        assert!(!job.is_complete());
        assert!(!job.has_failed());
    }

    #[test]
    fn embedded_job_error_becomes_response_error() {
        let job: AsyncJob = serde_json::from_value(serde_json::json!({
            "status": "ERROR",
            "jobId": "852a1e4a",
            "callbackUrl": "https://dns.api.example.com/v1.0/123456/status/852a1e4a",
            "error": { "code": 500, "message": "Server error", "details": "boom" }
        }))
        .unwrap();

        assert!(job.has_failed());
        let err = job.ensure_success().unwrap_err();
        assert!(matches!(err, Error::ResponseError { .. }));
    }
}
