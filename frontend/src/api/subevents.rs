use crate::api::api_url;
use crate::api::utils::{
    authenticated_get, authenticated_post, expect_success, read_json, send, send_json,
};
use log::debug;
use shared::{ApiError, CreateRoundRequest, SubEventResult, SubmitScoresRequest};

pub async fn add_round(request: &CreateRoundRequest) -> Result<(), ApiError> {
    debug!(
        "Adding round '{}' to sub-event {}",
        request.name, request.sub_event_id
    );

    let response = send_json(authenticated_post(&api_url("/api/subevents/rounds")), request).await?;
    expect_success(response).await?;

    debug!("Successfully added round: {}", request.name);
    Ok(())
}

pub async fn submit_scores(request: &SubmitScoresRequest) -> Result<(), ApiError> {
    debug!(
        "Submitting scores for participant {} in round {}",
        request.participant_id, request.round_id
    );

    let response = send_json(authenticated_post(&api_url("/api/subevents/scores")), request).await?;
    expect_success(response).await?;

    debug!("Successfully submitted scores");
    Ok(())
}

pub async fn results(event_id: &str, sub_event_id: &str) -> Result<Vec<SubEventResult>, ApiError> {
    debug!("Fetching results for {}/{}", event_id, sub_event_id);

    let url = format!(
        "{}/{}/{}/results",
        api_url("/api/subevents"),
        event_id,
        sub_event_id
    );
    let response = send(authenticated_get(&url)).await?;
    let results: Vec<SubEventResult> = read_json(response).await?;

    debug!("Successfully fetched {} results", results.len());
    Ok(results)
}
