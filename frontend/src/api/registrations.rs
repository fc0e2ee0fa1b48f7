use crate::api::api_url;
use crate::api::utils::{
    authenticated_delete, authenticated_get, authenticated_post, expect_success, read_json, send,
    send_json,
};
use log::debug;
use shared::{ApiError, CreateRegistrationRequest, MyRegistrations, SubEventScores};

pub async fn register_for_event(event_id: &str) -> Result<(), ApiError> {
    debug!("Registering for event: {}", event_id);

    let request = CreateRegistrationRequest {
        event_id: event_id.to_string(),
    };
    let response = send_json(authenticated_post(&api_url("/api/registrations")), &request).await?;
    expect_success(response).await?;

    debug!("Successfully registered for event: {}", event_id);
    Ok(())
}

pub async fn my_registrations() -> Result<MyRegistrations, ApiError> {
    debug!("Fetching my registrations");

    let response = send(authenticated_get(&api_url(
        "/api/registrations/my-registrations",
    )))
    .await?;
    let registrations: MyRegistrations = read_json(response).await?;

    debug!(
        "Successfully fetched {} upcoming and {} past registrations",
        registrations.upcoming_events.len(),
        registrations.past_events.len()
    );
    Ok(registrations)
}

pub async fn cancel_registration(registration_id: &str) -> Result<(), ApiError> {
    debug!("Cancelling registration: {}", registration_id);

    let url = format!("{}/{}", api_url("/api/registrations"), registration_id);
    let response = send(authenticated_delete(&url)).await?;
    expect_success(response).await?;

    debug!("Successfully cancelled registration: {}", registration_id);
    Ok(())
}

/// The signed-in student's scores per sub-event of an event.
pub async fn my_scores(event_id: &str) -> Result<Vec<SubEventScores>, ApiError> {
    debug!("Fetching my scores for event: {}", event_id);

    let url = format!("{}/{}", api_url("/api/registrations/my-scores"), event_id);
    let response = send(authenticated_get(&url)).await?;
    let scores: Vec<SubEventScores> = read_json(response).await?;

    debug!("Successfully fetched scores for {} sub-events", scores.len());
    Ok(scores)
}
