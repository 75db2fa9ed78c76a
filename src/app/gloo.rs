//! WASM application implementation
//!
//! Binds `CalendarHandler` to the page: looks up the form and the result
//! container, listens for `submit`, and reads fields out of `FormData`.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, DocumentReadyState, Element, Event, FormData, HtmlFormElement};

use crate::app::CalendarHandler;
use crate::client::gloo::WasmClient;
use crate::config::CalendarConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::interface::{FormSubmission, ResultView};
use crate::model::FormPayload;

thread_local! {
    static MOUNTED: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

// Helper function to convert JsValue errors to our error type
fn js_err_to_string(err: impl std::fmt::Debug) -> ErrorKind {
    ErrorKind::Dom(format!("{:?}", err))
}

fn to_js(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ErrorKind::Dom("no global document".to_string()).into())
}

/// Result container looked up by id on every write, so a container added or
/// replaced after the form was attached is still found.
#[derive(Debug, Clone)]
pub struct ElementView {
    document: Document,
    id: String,
}

impl ElementView {
    pub fn new(document: Document, id: impl Into<String>) -> Self {
        Self {
            document,
            id: id.into(),
        }
    }

    fn element(&self) -> Option<Element> {
        self.document.get_element_by_id(&self.id)
    }
}

impl ResultView for ElementView {
    fn ready(&self) -> Result<()> {
        match self.element() {
            Some(_) => Ok(()),
            None => Err(ErrorKind::Dom(format!("no #{} on this page", self.id)).into()),
        }
    }

    fn set_html(&self, html: &str) {
        match self.element() {
            Some(element) => element.set_inner_html(html),
            None => log::warn!("#{} disappeared, dropping update", self.id),
        }
    }
}

/// One `submit` event together with the form it fired on.
#[derive(Debug, Clone)]
pub struct DomSubmission {
    event: Event,
    form: HtmlFormElement,
}

impl FormSubmission for DomSubmission {
    fn prevent_default(&self) {
        self.event.prevent_default();
    }

    fn fields(&self) -> Result<FormPayload> {
        form_payload(&self.form)
    }
}

/// Reads every text entry of the form; see `FormPayload::from_entries`.
pub fn form_payload(form: &HtmlFormElement) -> Result<FormPayload> {
    let data = FormData::new_with_form(form).map_err(js_err_to_string)?;
    let iter = js_sys::try_iter(&data)
        .map_err(js_err_to_string)?
        .ok_or_else(|| ErrorKind::Dom("FormData is not iterable".to_string()))?;

    let mut entries = Vec::new();
    for entry in iter {
        let pair: js_sys::Array = entry
            .map_err(js_err_to_string)?
            .dyn_into()
            .map_err(js_err_to_string)?;
        entries.push((pair.get(0).as_string(), pair.get(1).as_string()));
    }

    Ok(FormPayload::from_entries(entries))
}

/// Attaches the submit handler described by `config` whenever the form
/// exists. The result container is resolved at submit time. Returns `false`
/// when the page has no such form, or when it is already attached.
pub fn attach(config: &CalendarConfig) -> Result<bool> {
    let document = document()?;

    let Some(form) = document.get_element_by_id(&config.form_id) else {
        log::debug!("no #{} on this page", config.form_id);
        return Ok(false);
    };
    let form: HtmlFormElement = form
        .dyn_into()
        .map_err(|_| ErrorKind::Dom(format!("#{} is not a form", config.form_id)))?;

    if document.get_element_by_id(&config.result_id).is_none() {
        log::warn!("no #{} yet; submissions fail until it exists", config.result_id);
    }

    let fresh = MOUNTED.with(|m| m.borrow_mut().insert(config.form_id.clone()));
    if !fresh {
        log::debug!("#{} already has a submit handler", config.form_id);
        return Ok(false);
    }

    let handler = Rc::new(CalendarHandler::new(
        WasmClient::from_config(config),
        ElementView::new(document, config.result_id.clone()),
    ));

    let target = form.clone();
    let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let submission = DomSubmission {
            event,
            form: target.clone(),
        };
        // preventDefault only counts while the event is being dispatched
        submission.prevent_default();

        let handler = Rc::clone(&handler);
        spawn_local(async move {
            let outcome = handler.handle_submit(&submission).await;
            log::debug!("submit outcome: {outcome:?}");
        });
    });

    form.add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())
        .map_err(js_err_to_string)?;
    listener.forget();

    log::info!("calendar form #{} attached", config.form_id);
    Ok(true)
}

/// Runs `f` once the document is parsed, or right away if it already is.
fn on_dom_ready(f: impl FnOnce() + 'static) -> Result<()> {
    let document = document()?;

    if document.ready_state() != DocumentReadyState::Loading {
        f();
        return Ok(());
    }

    let callback = Closure::once(f);
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())
        .map_err(js_err_to_string)?;
    callback.forget();

    Ok(())
}

fn parse_config(value: &JsValue) -> Result<CalendarConfig> {
    if value.is_undefined() || value.is_null() {
        return Ok(CalendarConfig::default());
    }

    let json: String = js_sys::JSON::stringify(value)
        .map_err(js_err_to_string)?
        .into();
    Ok(serde_json::from_str(&json)?)
}

/// Attach with custom ids or endpoint, e.g.
/// `mount({ formId: "plan", resultId: "planOut", endpoint: "/v2/calendar" })`.
#[wasm_bindgen]
pub fn mount(config: JsValue) -> std::result::Result<bool, JsValue> {
    let config = parse_config(&config).map_err(to_js)?;
    attach(&config).map_err(to_js)
}

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    crate::logging::init(log::LevelFilter::Info);

    on_dom_ready(|| {
        if let Err(e) = attach(&CalendarConfig::default()) {
            log::error!("failed to attach calendar form: {e}");
        }
    })
    .map_err(to_js)
}
