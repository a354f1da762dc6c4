use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::LumeraError;
use crate::models::{ApiEnvelope, Report};

/// Read-only client for the patient-history backend. One outstanding request
/// at a time; every request carries a bounded timeout.
pub struct ReportClient {
    client: Client,
    base_url: String,
}

impl ReportClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LumeraError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LumeraError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch a single report by identifier.
    pub async fn fetch_report(&self, report_id: i64) -> Result<Report, LumeraError> {
        let url = format!("{}/patient-history/report/{}", self.base_url, report_id);
        let envelope: ApiEnvelope<Report> = self.get_envelope(&url).await?;
        envelope
            .into_data()
            .ok_or_else(|| LumeraError::NotFound(format!("report {}", report_id)))
    }

    /// Fetch the historical scan summaries for one patient.
    pub async fn fetch_history(&self, patient_id: i64) -> Result<Vec<Report>, LumeraError> {
        let url = format!("{}/patient-history/{}", self.base_url, patient_id);
        let envelope: ApiEnvelope<Vec<Report>> = self.get_envelope(&url).await?;
        envelope
            .into_data()
            .ok_or_else(|| LumeraError::NotFound(format!("scans for patient {}", patient_id)))
    }

    async fn get_envelope<T: DeserializeOwned>(&self, url: &str) -> Result<ApiEnvelope<T>, LumeraError> {
        debug!(%url, "GET");

        let resp = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                LumeraError::Transport(format!("Request timed out: {}", url))
            } else {
                LumeraError::Transport(format!("Request failed: {}", e))
            }
        })?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LumeraError::NotFound(format!("no record at {}", url)));
        }
        if !status.is_success() {
            return Err(LumeraError::Api(format!("Backend returned {}", status)));
        }

        resp.json()
            .await
            .map_err(|e| LumeraError::Api(format!("Malformed backend payload: {}", e)))
    }
}
