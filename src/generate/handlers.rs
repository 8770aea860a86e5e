use actix_web::http::header;
use actix_web::{web, HttpResponse};

use crate::generate::{service, GenerationRequest};
use crate::{AppState, ErrorResponse, ServiceError};

#[utoipa::path(
    context_path = "/api",
    tag = "Generation Service",
    post,
    path = "/generate_pdf",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Generated PDF document", body = Vec<u8>, content_type = "application/pdf"),
        (status = 400, description = "Invalid generation request", body = ErrorResponse),
        (status = 404, description = "Template or user not found", body = ErrorResponse),
        (status = 500, description = "PDF composition failed", body = ErrorResponse)
    )
)]
pub async fn generate_pdf(
    request: web::Json<GenerationRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServiceError> {
    let request = request.into_inner();
    let state = state.clone();

    // Composition is CPU-bound for large templates; keep it off the
    // async workers.
    let pdf = web::block(move || service::generate(&request, &state.templates, &state.users))
        .await
        .map_err(|e| ServiceError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", pdf.filename),
        ))
        .body(pdf.bytes))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/generate_pdf").route(web::post().to(generate_pdf)));
}
