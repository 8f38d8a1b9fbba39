use super::client::{ApiClient, ApiError};
use crate::models::{AnalysisRequest, AnalyzeEnvelope, HealthStatus};

impl ApiClient {
    /// Run a remote analysis for the selected room type, month and day.
    /// Returns the raw envelope; normalization is the caller's job.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalyzeEnvelope, ApiError> {
        self.post("/api/analyze", request).await
    }

    /// Check that the analysis service is reachable
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get("/api/health").await
    }
}
