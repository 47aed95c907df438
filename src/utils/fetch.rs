//! Network fetching utilities.
//!
//! Plain GET requests over the Fetch API. No timeout, no retry and no
//! caching: every call goes to the network.

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::core::error::FetchError;

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_url(url).await?;
    parse_json(&text)
}

/// Decode a response body.
pub fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Accept 2xx statuses, reject everything else.
pub fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::HttpError(status))
    }
}

/// Fetch text from a URL using the Fetch API.
async fn fetch_url(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let result = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            FetchError::NetworkError(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
        })?;
    let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

    check_status(resp.status())?;

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::InvalidContent)
}
