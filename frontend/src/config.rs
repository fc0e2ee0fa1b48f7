/// Endpoints of the services the app talks to, fixed at build time.
pub struct Config;

pub const DEFAULT_ASSISTANT_URL: &str = "http://localhost:5001";
pub const DEFAULT_ARCHIVE_URL: &str = "http://localhost:5002";

/// Local storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Local storage key of the signed-in user.
pub const USER_KEY: &str = "user";

impl Config {
    pub fn api_base_url() -> String {
        // Empty means relative URLs: Trunk proxies /api/ in development and
        // nginx does in production.
        option_env!("CAMPUS_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_default()
    }

    /// Chatbot and PDF extraction service.
    pub fn assistant_base_url() -> String {
        option_env!("CAMPUS_ASSISTANT_URL")
            .unwrap_or(DEFAULT_ASSISTANT_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Document archive that keeps a copy of uploaded PDFs.
    pub fn archive_base_url() -> String {
        option_env!("CAMPUS_ARCHIVE_URL")
            .unwrap_or(DEFAULT_ARCHIVE_URL)
            .trim_end_matches('/')
            .to_string()
    }
}
