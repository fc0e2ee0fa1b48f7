use crate::api::utils::{authenticated_post, expect_success, read_json, send_json};
use crate::api::{archive_url, assistant_url};
use gloo_net::http::{Request, Response};
use log::debug;
use shared::{ApiError, ChatRequest, ChatResponse, ExtractedEventDetails};
use web_sys::{File, FormData};

/// Multipart field the PDF services read.
pub const PDF_FIELD: &str = "pdf";

pub async fn ask(question: &str, registered_events: Vec<String>) -> Result<String, ApiError> {
    debug!(
        "Asking assistant with {} registered events",
        registered_events.len()
    );

    let request = ChatRequest {
        question: question.to_string(),
        registered_events,
    };
    let response = send_json(authenticated_post(&assistant_url("/chat")), &request).await?;
    let body: ChatResponse = read_json(response).await?;

    debug!("Assistant answered with {} characters", body.answer.len());
    Ok(body.answer)
}

fn pdf_form(file: &File) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    form.append_with_blob_and_filename(PDF_FIELD, file, &file.name())
        .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    Ok(form)
}

async fn post_form(url: &str, form: FormData) -> Result<Response, ApiError> {
    let request = Request::post(url)
        .body(form)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Sends a PDF for detail extraction, then files a copy with the archive.
pub async fn extract_event_details(file: &File) -> Result<ExtractedEventDetails, ApiError> {
    debug!("Extracting event details from {}", file.name());

    let form = pdf_form(file)?;
    let response = post_form(&assistant_url("/extract-event-details"), form.clone()).await?;
    let details: ExtractedEventDetails = read_json(response).await?;

    let archived = post_form(&archive_url("/upload"), form).await?;
    expect_success(archived).await?;

    debug!("Successfully extracted details for: {:?}", details.name);
    Ok(details)
}
