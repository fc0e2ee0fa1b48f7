use crate::api::api_url;
use crate::api::utils::{read_json, send_json};
use gloo_net::http::Request;
use log::debug;
use shared::{ApiError, AuthResponse, LoginRequest, RegisterRequest};

pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    debug!("Attempting login for user: {}", email);

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let response = send_json(Request::post(&api_url("/api/auth/login")), &request).await?;
    let auth: AuthResponse = read_json(response).await?;

    debug!("Successfully logged in: {}", auth.user.username);
    Ok(auth)
}

pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    debug!("Registering new user: {}", request.email);

    let response = send_json(Request::post(&api_url("/api/auth/register")), request).await?;
    let auth: AuthResponse = read_json(response).await?;

    debug!("Successfully registered user: {}", auth.user.username);
    Ok(auth)
}
