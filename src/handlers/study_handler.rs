use actix_web::{get, http::header::ContentType, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::ResultStyle,
        dto::{request::StudyRequestDto, response::StudyResponseDto},
    },
    views::{render_page, RenderedResult},
};

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

#[get("/")]
pub async fn index() -> HttpResponse {
    html(render_page("", None))
}

/// Handles a button press on the page and re-renders it with the result.
#[post("/")]
pub async fn submit_notes(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<StudyRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = form.into_inner();
    request.validate()?;

    log::info!(
        "[{}] '{}' requested from page",
        get_request_id(&req).unwrap_or_default(),
        request.action
    );

    let output = state
        .study_service
        .run(&request.action, &request.notes)
        .await
        .message();
    let result = RenderedResult {
        style: ResultStyle::for_selector(&request.action),
        text: &output,
    };

    Ok(html(render_page(&request.notes, Some(&result))))
}

#[post("/api/study")]
pub async fn study_api(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<StudyRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    log::info!(
        "[{}] '{}' requested via API",
        get_request_id(&req).unwrap_or_default(),
        request.action
    );

    let output = state
        .study_service
        .run(&request.action, &request.notes)
        .await
        .message();

    Ok(HttpResponse::Ok().json(StudyResponseDto::new(&request.action, output)))
}
