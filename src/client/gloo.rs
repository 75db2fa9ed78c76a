//! WASM HTTP client implementation using gloo_net
//!
//! Requests go through the browser's fetch API, so relative endpoints
//! resolve against the page's origin and its cookies travel along.

use crate::config::CalendarConfig;
use crate::error::{ErrorKind, Result};
use crate::interface::{CalendarApi, HttpClient};
use crate::model::{FormPayload, ScheduleResponse};
use gloo_net::http::{Request, RequestBuilder};
use web_sys::RequestCredentials;

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient {
    url: String,
}

impl HttpClient for WasmClient {
    async fn new(config: &CalendarConfig) -> Result<Self> {
        Ok(Self::from_config(config))
    }
}

impl WasmClient {
    /// Nothing to set up: the browser owns the connection pool
    pub fn from_config(config: &CalendarConfig) -> Self {
        Self { url: config.url() }
    }

    /// Build a POST with the headers every calendar request carries
    fn build_request(&self) -> RequestBuilder {
        Request::post(&self.url)
            .credentials(RequestCredentials::SameOrigin)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
    }

    /// Check the status, then parse the body ourselves so a bad body is
    /// reported with its text
    async fn handle_json_response(resp: gloo_net::http::Response) -> Result<ScheduleResponse> {
        let ok = resp.ok();
        let status = resp.status();
        let text = resp.text().await?;

        log::debug!("Response status: {status}, length: {}", text.len());

        if !ok {
            return Err(ErrorKind::HttpStatus { status, body: text }.into());
        }

        serde_json::from_str(&text).map_err(|e| {
            log::debug!("Invalid JSON response: {text}");
            e.into()
        })
    }
}

impl CalendarApi for WasmClient {
    async fn fetch_calendar(&self, payload: &FormPayload) -> Result<ScheduleResponse> {
        log::debug!("POST {} with {} field(s)", self.url, payload.len());

        let resp = self.build_request().body(payload.to_json()?)?.send().await?;

        Self::handle_json_response(resp).await
    }
}
