pub mod analytics;
pub mod assistant;
pub mod auth;
pub mod events;
pub mod registrations;
pub mod scheduling;
pub mod subevents;
pub mod utils;

use crate::config::Config;

fn join(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        // Use relative URL
        path.to_string()
    } else {
        format!("{}{}", base_url, path)
    }
}

/// URL of a REST backend path.
pub fn api_url(path: &str) -> String {
    join(&Config::api_base_url(), path)
}

pub fn assistant_url(path: &str) -> String {
    join(&Config::assistant_base_url(), path)
}

pub fn archive_url(path: &str) -> String {
    join(&Config::archive_base_url(), path)
}
