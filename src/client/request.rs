//! No-WASM HTTP client implementation using reqwest

use crate::config::CalendarConfig;
use crate::error::{ErrorKind, Result};
use crate::interface::{CalendarApi, HttpClient};
use crate::model::{FormPayload, ScheduleResponse};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client,
};

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
    url: String,
}

impl HttpClient for NoWasmClient {
    async fn new(config: &CalendarConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            url: config.url(),
        })
    }
}

impl NoWasmClient {
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CalendarApi for NoWasmClient {
    async fn fetch_calendar(&self, payload: &FormPayload) -> Result<ScheduleResponse> {
        log::debug!("POST {} with {} field(s)", self.url, payload.len());

        let resp = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload.to_json()?)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        log::debug!("Response status: {status}, length: {}", text.len());

        if !status.is_success() {
            return Err(ErrorKind::HttpStatus {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        Ok(serde_json::from_str(&text)?)
    }
}

pub async fn create_client(config: &CalendarConfig) -> Result<NoWasmClient> {
    NoWasmClient::new(config).await
}
