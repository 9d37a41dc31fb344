use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use actix_web::{test, web, App};
use async_trait::async_trait;
use secrecy::SecretString;

use study_bot::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    handlers,
    middleware::{RequestIdMiddleware, REQUEST_ID_HEADER},
    models::domain::StudyAction,
    services::model_service::ModelService,
};

/// Records every prompt and answers with a fixed reply.
struct RecordingModelService {
    reply: AppResult<String>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingModelService {
    fn replying(reply: AppResult<String>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelService for RecordingModelService {
    async fn generate_content(&self, prompt: &str) -> AppResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }
}

fn local_config() -> Config {
    Config {
        gemini_api_key: SecretString::from("integration-key".to_string()),
        gemini_model: "gemini-2.5-flash".to_string(),
        gemini_api_base: "http://127.0.0.1:9".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 0,
        response_delay: Duration::ZERO,
        max_payload_bytes: 64 * 1024,
    }
}

const NOTES: &str = "The French Revolution began in 1789.";

#[actix_web::test]
async fn every_action_sends_a_distinct_prompt_with_the_notes() {
    let model = RecordingModelService::replying(Ok("done".to_string()));
    let state = AppState::with_model_service(local_config(), model.clone());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(handlers::configure(64 * 1024)),
    )
    .await;

    for action in StudyAction::ALL {
        let req = test::TestRequest::post()
            .uri("/api/study")
            .set_json(serde_json::json!({ "action": action.label(), "notes": NOTES }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["output"], "done");
    }

    let prompts = model.prompts();
    assert_eq!(prompts.len(), 3);
    assert!(prompts.iter().all(|p| p.contains(NOTES)));
    assert_ne!(prompts[0], prompts[1]);
    assert_ne!(prompts[1], prompts[2]);
    assert_ne!(prompts[0], prompts[2]);
}

#[actix_web::test]
async fn blank_notes_warn_without_calling_the_model() {
    let model = RecordingModelService::replying(Ok("unused".to_string()));
    let state = AppState::with_model_service(local_config(), model.clone());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(handlers::configure(64 * 1024)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/study")
        .set_json(serde_json::json!({ "action": "quiz", "notes": " \n " }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["output"], "⚠️ Please enter some notes first.");
    assert!(model.prompts().is_empty());
}

#[actix_web::test]
async fn model_failure_becomes_error_output_on_the_page() {
    let model = RecordingModelService::replying(Err(AppError::ModelUnavailable(
        "connection reset by peer".to_string(),
    )));
    let state = AppState::with_model_service(local_config(), model);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure(64 * 1024)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("action", "Key Points"), ("notes", NOTES)])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert!(resp.headers().contains_key(REQUEST_ID_HEADER));

    let body = test::read_body(resp).await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("❌ Error: Model unavailable: connection reset by peer"));
    assert!(body.contains(NOTES));
}

#[actix_web::test]
async fn successful_reply_is_returned_trimmed() {
    let model = RecordingModelService::replying(Ok("\n\n1. Liberty\n2. Equality\n\n".to_string()));
    let state = AppState::with_model_service(local_config(), model);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(handlers::configure(64 * 1024)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/study")
        .set_json(serde_json::json!({ "action": "key-points", "notes": NOTES }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["output"], "1. Liberty\n2. Equality");
    assert_eq!(body["style"], "success");
    assert_eq!(body["action"], "key-points");
}
