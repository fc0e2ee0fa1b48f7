use crate::api::api_url;
use crate::api::utils::{
    authenticated_delete, authenticated_get, authenticated_post, authenticated_put,
    expect_success, read_json, send, send_json,
};
use log::debug;
use shared::{ApiError, EventDto, EventListResponse, EventPayload};

pub async fn list_events() -> Result<Vec<EventDto>, ApiError> {
    debug!("Fetching all events");

    let response = send(authenticated_get(&api_url("/api/events"))).await?;
    let events: Vec<EventDto> = read_json(response).await?;

    debug!("Successfully fetched {} events", events.len());
    Ok(events)
}

/// Events created by the signed-in organizer.
pub async fn my_events() -> Result<Vec<EventDto>, ApiError> {
    debug!("Fetching organizer events");

    let response = send(authenticated_get(&api_url("/api/events/organizer/my-events"))).await?;
    let body: EventListResponse = read_json(response).await?;

    debug!("Successfully fetched {} organizer events", body.events.len());
    Ok(body.events)
}

pub async fn get_event(id: &str) -> Result<EventDto, ApiError> {
    debug!("Fetching event with ID: {}", id);

    let url = format!("{}/{}", api_url("/api/events"), id);
    let response = send(authenticated_get(&url)).await?;
    let event: EventDto = read_json(response).await?;

    debug!("Successfully fetched event: {}", event.name);
    Ok(event)
}

pub async fn create_event(payload: &EventPayload) -> Result<EventDto, ApiError> {
    debug!("Creating event: {}", payload.name);

    let response = send_json(authenticated_post(&api_url("/api/events")), payload).await?;
    let event: EventDto = read_json(response).await?;

    debug!("Successfully created event with ID: {}", event.id);
    Ok(event)
}

pub async fn update_event(id: &str, payload: &EventPayload) -> Result<(), ApiError> {
    debug!("Updating event with ID: {}", id);

    let url = format!("{}/{}", api_url("/api/events"), id);
    let response = send_json(authenticated_put(&url), payload).await?;
    expect_success(response).await?;

    debug!("Successfully updated event: {}", id);
    Ok(())
}

pub async fn delete_event(id: &str) -> Result<(), ApiError> {
    debug!("Deleting event with ID: {}", id);

    let url = format!("{}/{}", api_url("/api/events"), id);
    let response = send(authenticated_delete(&url)).await?;
    expect_success(response).await?;

    debug!("Successfully deleted event: {}", id);
    Ok(())
}
