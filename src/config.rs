use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "/api/calendar";
pub const DEFAULT_FORM_ID: &str = "calendarForm";
pub const DEFAULT_RESULT_ID: &str = "calendarResult";
pub const DEFAULT_NATIVE_BASE_URL: &str = "http://127.0.0.1:5000";

pub const BASE_URL_ENV: &str = "CROP_CALENDAR_BASE_URL";

/// Where the handler posts and which elements it binds to.
///
/// `base_url` is prepended to `endpoint`; in the browser it stays empty so
/// the request goes to the page's own origin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarConfig {
    pub base_url: String,
    pub endpoint: String,
    pub form_id: String,
    pub result_id: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            form_id: DEFAULT_FORM_ID.to_string(),
            result_id: DEFAULT_RESULT_ID.to_string(),
        }
    }
}

impl CalendarConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Native defaults: `CROP_CALENDAR_BASE_URL`, else the local dev server.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_NATIVE_BASE_URL.to_string());

        Self::with_base_url(base_url)
    }

    pub fn url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.endpoint.starts_with('/') {
            format!("{base}{}", self.endpoint)
        } else {
            format!("{base}/{}", self.endpoint)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_relative_endpoint() {
        let config = CalendarConfig::default();
        assert_eq!(config.url(), "/api/calendar");
        assert_eq!(config.form_id, "calendarForm");
        assert_eq!(config.result_id, "calendarResult");
    }

    #[test]
    fn url_joins_without_double_slash() {
        assert_eq!(
            CalendarConfig::with_base_url("http://localhost:5000/").url(),
            "http://localhost:5000/api/calendar"
        );

        let config = CalendarConfig {
            endpoint: "api/calendar".to_string(),
            ..CalendarConfig::with_base_url("http://localhost:5000")
        };
        assert_eq!(config.url(), "http://localhost:5000/api/calendar");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: CalendarConfig =
            serde_json::from_str(r#"{"resultId": "out", "baseUrl": "https://farm.example"}"#)
                .unwrap();

        assert_eq!(config.result_id, "out");
        assert_eq!(config.form_id, DEFAULT_FORM_ID);
        assert_eq!(config.url(), "https://farm.example/api/calendar");
    }
}
