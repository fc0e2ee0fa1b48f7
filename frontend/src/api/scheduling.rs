use crate::api::api_url;
use crate::api::utils::{
    authenticated_get, authenticated_post, authenticated_put, expect_success, read_json, send,
    send_json,
};
use log::debug;
use shared::{ApiError, OptimizeRequest, OptimizeResponse, ScheduleListResponse, SubEventSchedule};

pub fn schedules_url(event_id: &str) -> String {
    format!(
        "{}?eventId={}",
        api_url("/api/scheduling/schedule"),
        urlencoding::encode(event_id)
    )
}

pub async fn get_schedules(event_id: &str) -> Result<Vec<SubEventSchedule>, ApiError> {
    debug!("Fetching schedules for event: {}", event_id);

    let response = send(authenticated_get(&schedules_url(event_id))).await?;
    let body: ScheduleListResponse = read_json(response).await?;

    debug!("Successfully fetched {} schedules", body.schedules.len());
    Ok(body.schedules)
}

pub async fn update_schedule(schedule: &SubEventSchedule) -> Result<(), ApiError> {
    debug!("Saving schedule: {}", schedule.id);

    let url = format!("{}/{}", api_url("/api/scheduling/edit"), schedule.id);
    let response = send_json(authenticated_put(&url), schedule).await?;
    expect_success(response).await?;

    debug!("Successfully saved schedule: {}", schedule.id);
    Ok(())
}

/// Asks the backend to recompute every schedule.
pub async fn optimize_schedule() -> Result<OptimizeResponse, ApiError> {
    debug!("Requesting schedule optimization");

    let response = send_json(
        authenticated_post(&api_url("/api/scheduling/optimize")),
        &OptimizeRequest::default(),
    )
    .await?;
    let body: OptimizeResponse = read_json(response).await?;

    debug!("Optimization returned {} schedules", body.schedules.len());
    Ok(body)
}
