#![allow(async_fn_in_trait)] // traits are only used with concrete types in this crate

use crate::config::CalendarConfig;
use crate::error::{Error, Result};
use crate::model::{FormPayload, ScheduleResponse};

/// Common trait for HTTP client construction
pub trait HttpClient {
    /// Create a client that posts to `config.url()`
    async fn new(config: &CalendarConfig) -> Result<Self>
    where
        Self: Sized;
}

/// The calendar endpoint
pub trait CalendarApi {
    /// POST the payload as JSON and parse the reply
    async fn fetch_calendar(&self, payload: &FormPayload) -> Result<ScheduleResponse>;
}

/// The container whose markup the handler overwrites
pub trait ResultView {
    /// Fails when there is nowhere to write, e.g. the container is gone
    fn ready(&self) -> Result<()> {
        Ok(())
    }

    fn set_html(&self, html: &str);
}

/// A single submit event on the calendar form
pub trait FormSubmission {
    /// Stop the browser from navigating away
    fn prevent_default(&self);

    /// Read every text field of the submitted form
    fn fields(&self) -> Result<FormPayload>;
}

/// Where failures are reported after the user-visible message is written
pub trait Diagnostics {
    fn record(&self, error: &Error);
}

/// Reports through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn record(&self, error: &Error) {
        log::error!("calendar request failed: {error:?}");
    }
}
