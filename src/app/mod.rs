//! Application module - the calendar form's submit handler
//!
//! `CalendarHandler` owns the submit contract and is generic over where the
//! form, the result container and the endpoint come from. The platform
//! modules wire it to the browser DOM (`wasm`) or to stdout (`no-wasm`).

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::interface::{CalendarApi, Diagnostics, FormSubmission, LogDiagnostics, ResultView};
use crate::model::FormPayload;
use crate::view;

/// What a submission ended up writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Heading and list with this many entries.
    Schedule { entries: usize },
    NoSchedule,
    Failed,
    /// A newer submission started before this one resolved; nothing written.
    Superseded,
}

impl SubmitOutcome {
    pub fn is_failure(self) -> bool {
        self == SubmitOutcome::Failed
    }
}

pub struct CalendarHandler<A, V, D = LogDiagnostics> {
    api: A,
    view: V,
    diagnostics: D,
    generation: AtomicU64,
}

impl<A, V> CalendarHandler<A, V, LogDiagnostics> {
    pub fn new(api: A, view: V) -> Self {
        Self::with_diagnostics(api, view, LogDiagnostics)
    }
}

impl<A, V, D> CalendarHandler<A, V, D> {
    pub fn with_diagnostics(api: A, view: V, diagnostics: D) -> Self {
        Self {
            api,
            view,
            diagnostics,
            generation: AtomicU64::new(0),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

impl<A, V, D> CalendarHandler<A, V, D>
where
    A: CalendarApi,
    V: ResultView,
    D: Diagnostics,
{
    /// Full submit path: suppress navigation, read the form, then `submit`.
    pub async fn handle_submit<E>(&self, event: &E) -> SubmitOutcome
    where
        E: FormSubmission + ?Sized,
    {
        event.prevent_default();

        if let Err(e) = self.view.ready() {
            self.begin();
            self.diagnostics.record(&e);
            return SubmitOutcome::Failed;
        }

        match event.fields() {
            Ok(payload) => self.submit(payload).await,
            Err(e) => {
                self.begin();
                self.view.set_html(view::FETCH_ERROR);
                self.diagnostics.record(&e);
                SubmitOutcome::Failed
            }
        }
    }

    /// Posts an already collected payload and renders whatever comes back.
    pub async fn submit(&self, payload: FormPayload) -> SubmitOutcome {
        let generation = self.begin();
        if payload.is_empty() {
            log::debug!("submission {generation}: form has no text fields");
        } else {
            log::debug!("submission {generation}: {} field(s)", payload.len());
        }

        self.view.set_html(view::LOADING);
        let result = self.api.fetch_calendar(&payload).await;

        if !self.is_current(generation) {
            log::debug!("submission {generation} superseded, dropping its response");
            if let Err(e) = &result {
                self.diagnostics.record(e);
            }
            return SubmitOutcome::Superseded;
        }

        match result {
            Ok(resp) => {
                self.view.set_html(&view::render_response(&resp));
                match &resp.schedule {
                    Some(schedule) => SubmitOutcome::Schedule {
                        entries: schedule.len(),
                    },
                    None => SubmitOutcome::NoSchedule,
                }
            }
            Err(e) => {
                self.view.set_html(view::FETCH_ERROR);
                self.diagnostics.record(&e);
                SubmitOutcome::Failed
            }
        }
    }
}
