//! HTTP tests for the native calendar client, against a wiremock server.

#![cfg(feature = "no-wasm")]

use std::cell::RefCell;

use crop_calendar_client::error::ErrorKind;
use crop_calendar_client::interface::{CalendarApi, HttpClient, ResultView};
use crop_calendar_client::{
    CalendarConfig, CalendarHandler, FormPayload, NoWasmClient, ScheduleEntry, SubmitOutcome,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct RecordingView {
    writes: RefCell<Vec<String>>,
}

impl ResultView for RecordingView {
    fn set_html(&self, html: &str) {
        self.writes.borrow_mut().push(html.to_string());
    }
}

async fn client_for(server: &MockServer) -> NoWasmClient {
    NoWasmClient::new(&CalendarConfig::with_base_url(server.uri()))
        .await
        .unwrap()
}

fn maize_form() -> FormPayload {
    [("crop", "Maize"), ("sowing_date", "2024-05-01")]
        .into_iter()
        .collect()
}

#[tokio::test]
async fn posts_form_fields_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/calendar"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"crop": "Maize", "sowing_date": "2024-05-01"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "crop": "Maize",
            "schedule": [
                {"date": "2024-05-01", "task": "Plant"},
                {"date": "2024-05-21", "task": "First weeding"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .await
        .fetch_calendar(&maize_form())
        .await
        .unwrap();

    assert_eq!(resp.crop.as_deref(), Some("Maize"));
    assert_eq!(
        resp.schedule.unwrap()[1],
        ScheduleEntry {
            date: "2024-05-21".to_string(),
            task: "First weeding".to_string(),
        }
    );
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/calendar"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "Model error"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .fetch_calendar(&maize_form())
        .await
        .unwrap_err();

    match err.kind() {
        ErrorKind::HttpStatus { status, body } => {
            assert_eq!(*status, 500);
            assert!(body.contains("Model error"));
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/calendar"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .fetch_calendar(&maize_form())
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), ErrorKind::SerdeJsonError(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let client = NoWasmClient::new(&CalendarConfig::with_base_url("http://127.0.0.1:1"))
        .await
        .unwrap();

    let err = client.fetch_calendar(&maize_form()).await.unwrap_err();

    assert!(matches!(err.kind(), ErrorKind::ReqwestError(_)));
}

#[tokio::test]
async fn handler_renders_schedule_from_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/calendar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "crop": "Maize",
            "schedule": [{"date": "2024-05-01", "task": "Plant"}]
        })))
        .mount(&server)
        .await;

    let handler = CalendarHandler::new(client_for(&server).await, RecordingView::default());
    let outcome = handler.submit(maize_form()).await;

    assert_eq!(outcome, SubmitOutcome::Schedule { entries: 1 });
    let writes = handler.view().writes.borrow();
    assert_eq!(writes[0], "Loading...");
    assert_eq!(
        writes[1],
        "<h4>Crop Calendar for Maize</h4><ul><li>2024-05-01 — Plant</li></ul>"
    );
}

#[tokio::test]
async fn handler_reports_missing_schedule() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/calendar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let handler = CalendarHandler::new(client_for(&server).await, RecordingView::default());
    let outcome = handler.submit(FormPayload::new()).await;

    assert_eq!(outcome, SubmitOutcome::NoSchedule);
    assert_eq!(
        handler.view().writes.borrow().last().map(String::as_str),
        Some("No schedule available.")
    );
}

#[tokio::test]
async fn handler_shows_error_on_server_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/calendar"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let handler = CalendarHandler::new(client_for(&server).await, RecordingView::default());
    let outcome = handler.submit(maize_form()).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(
        handler.view().writes.borrow().last().map(String::as_str),
        Some("Error fetching calendar.")
    );
}
