//! Browser-only checks: `wasm-pack test --headless --firefox frontend`.
#![cfg(target_arch = "wasm32")]

use frontend::api::utils::{require_token, stored_token};
use frontend::browser::browser_timezone;
use frontend::config::TOKEN_KEY;
use frontend::pages::dashboard::Dashboard;
use gloo_storage::{LocalStorage, Storage};
use shared::ApiError;
use std::time::Duration;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn token_is_required_before_private_requests() {
    LocalStorage::delete(TOKEN_KEY);
    assert_eq!(require_token(), Err(ApiError::MissingToken));

    LocalStorage::set(TOKEN_KEY, "").unwrap();
    assert_eq!(stored_token(), None);

    LocalStorage::set(TOKEN_KEY, "abc").unwrap();
    assert_eq!(require_token(), Ok("abc".to_string()));
    LocalStorage::delete(TOKEN_KEY);
}

#[wasm_bindgen_test]
fn browser_reports_a_timezone() {
    // any IANA name resolves; UTC is the fallback
    let tz = browser_timezone();
    assert!(!tz.name().is_empty());
}

#[wasm_bindgen_test]
async fn dashboard_without_session_asks_to_log_in() {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    // rendered outside the providers: every hook still runs before the session check
    yew::Renderer::<Dashboard>::with_root(root.clone()).render();
    yew::platform::time::sleep(Duration::ZERO).await;

    assert!(root
        .text_content()
        .unwrap_or_default()
        .contains("Please log in to view your events."));
}
