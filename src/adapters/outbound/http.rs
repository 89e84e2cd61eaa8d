use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

const BOT_USER_AGENT: &str = "mtgbot/0.2 (Discord card lookup bot)";

/// One client shared by every outbound adapter.
pub fn create_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BOT_USER_AGENT));
    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
}
