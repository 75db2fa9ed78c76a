//! No-WASM application implementation
//!
//! Drives `CalendarHandler` from the command line: the "form" is a list of
//! `name=value` arguments and the result container is stdout.

use std::io::Write;

use crate::app::{CalendarHandler, SubmitOutcome};
use crate::client::request::create_client;
use crate::config::CalendarConfig;
use crate::error::Result;
use crate::interface::{FormSubmission, ResultView};
use crate::model::FormPayload;

/// Writes each markup update as one line on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutView;

impl ResultView for StdoutView {
    fn set_html(&self, html: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{html}") {
            log::warn!("failed to write result: {e}");
        }
    }
}

/// `name=value` arguments standing in for a submitted form.
#[derive(Debug, Clone, Default)]
pub struct ArgsSubmission {
    pairs: Vec<String>,
}

impl ArgsSubmission {
    pub fn new(pairs: Vec<String>) -> Self {
        Self { pairs }
    }
}

impl FormSubmission for ArgsSubmission {
    fn prevent_default(&self) {}

    fn fields(&self) -> Result<FormPayload> {
        let mut payload = FormPayload::new();
        for pair in &self.pairs {
            let (name, value) = FormPayload::parse_pair(pair)?;
            payload.insert(name, value);
        }
        Ok(payload)
    }
}

/// True when `arg` is a base URL rather than a field whose value is a URL:
/// the scheme separator must come before any `=`.
fn is_base_url(arg: &str) -> bool {
    let Some(scheme_end) = arg.find("://") else {
        return false;
    };
    if arg.find('=').is_some_and(|eq| eq < scheme_end) {
        return false;
    }
    reqwest::Url::parse(arg).is_ok()
}

/// Splits argv (without the program name) into config and field pairs. A
/// leading base URL overrides the configured one.
pub fn parse_args(args: &[String]) -> (CalendarConfig, ArgsSubmission) {
    match args.split_first() {
        Some((first, rest)) if is_base_url(first) => (
            CalendarConfig::with_base_url(first.as_str()),
            ArgsSubmission::new(rest.to_vec()),
        ),
        _ => (CalendarConfig::from_env(), ArgsSubmission::new(args.to_vec())),
    }
}

pub async fn run(config: &CalendarConfig, submission: &ArgsSubmission) -> Result<SubmitOutcome> {
    let client = create_client(config).await?;
    log::info!("posting calendar request to {}", client.url());

    let handler = CalendarHandler::new(client, StdoutView);
    Ok(handler.handle_submit(submission).await)
}
