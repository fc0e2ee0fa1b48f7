use crate::api::api_url;
use crate::api::utils::{authenticated_get, read_json, send};
use log::debug;
use shared::{ApiError, InsightsResponse, OverallInsights};

/// Organizer-wide counters; `None` when the backend has nothing to report.
pub async fn overall_insights() -> Result<Option<OverallInsights>, ApiError> {
    debug!("Fetching overall insights");

    let response = send(authenticated_get(&api_url("/api/analytics/overall-insights"))).await?;
    let body: InsightsResponse = read_json(response).await?;

    debug!("Successfully fetched insights: {}", body.insights.is_some());
    Ok(body.insights)
}
