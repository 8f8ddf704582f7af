use chrono::NaiveDate;
use juyou_compass::{App, CompassError, ReportGenerator, Step, UserInputs, GENERATION_ERROR_MSG};
use mockito::Matcher;
use serde_json::json;

mod support;
use support::sample_report;

const GENERATE_PATH: &str = "/models/gemini-3-flash-preview:generateContent";

fn filled_inputs() -> UserInputs {
    UserInputs {
        target_city: "Lisbon".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1991, 9, 9),
        birth_place: "Porto".to_string(),
        ..UserInputs::default()
    }
}

fn generator_for(server: &mockito::Server) -> ReportGenerator {
    ReportGenerator::new("test-key".to_string()).with_base_url(server.url())
}

#[tokio::test]
async fn successful_generation_reaches_the_report_step() {
    let mut server = mockito::Server::new_async().await;
    let report_text = serde_json::to_string(&sample_report(4)).unwrap();
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "candidates": [{
                    "content": { "parts": [{ "text": report_text }] }
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut app = App::new();
    *app.inputs_mut() = filled_inputs();

    app.run_generation(&generator_for(&server)).await.unwrap();

    mock.assert_async().await;
    assert_eq!(app.step(), Step::Report);
    let report = app.result().unwrap();
    assert_eq!(report.dest_analysis.dimensions.len(), 4);
    assert!(app.error().is_none());
}

#[tokio::test]
async fn server_error_maps_to_the_generic_message_and_returns_to_input() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(500)
        .with_body(json!({ "error": { "message": "backend melted" } }).to_string())
        .create_async()
        .await;

    let mut app = App::new();
    *app.inputs_mut() = filled_inputs();

    let err = app
        .run_generation(&generator_for(&server))
        .await
        .unwrap_err();
    match err {
        CompassError::Api { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("backend melted"));
        }
        other => panic!("expected api error, got {other:?}"),
    }

    assert_eq!(app.step(), Step::Input);
    assert_eq!(app.error(), Some(GENERATION_ERROR_MSG));
    assert_eq!(app.inputs(), &filled_inputs());
    assert!(app.result().is_none());
}

#[tokio::test]
async fn empty_candidates_fail_as_empty_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body(json!({ "candidates": [] }).to_string())
        .create_async()
        .await;

    let mut app = App::new();
    *app.inputs_mut() = filled_inputs();

    let err = app
        .run_generation(&generator_for(&server))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "EMPTY_RESPONSE");
    assert_eq!(app.step(), Step::Input);
}

#[tokio::test]
async fn unparseable_payload_fails_validation_after_transport_succeeds() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body(
            json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "{\"user_profile\": 42}" }] }
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut app = App::new();
    *app.inputs_mut() = filled_inputs();

    let err = app
        .run_generation(&generator_for(&server))
        .await
        .unwrap_err();
    assert!(matches!(err, CompassError::Validation(_)));
    assert_eq!(app.error(), Some(GENERATION_ERROR_MSG));
}

#[tokio::test]
async fn validation_failure_never_sends_a_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .expect(0)
        .create_async()
        .await;

    let mut app = App::new(); // required fields empty
    let err = app
        .run_generation(&generator_for(&server))
        .await
        .unwrap_err();
    assert!(matches!(err, CompassError::Validation(_)));
    assert_eq!(app.step(), Step::Input);

    mock.assert_async().await;
}
