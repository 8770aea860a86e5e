use actix_web::{web, HttpResponse};

use crate::template::models::{SaveTemplateRequest, Template};
use crate::{AppState, ErrorResponse, ServiceError};

#[utoipa::path(
    context_path = "/api",
    tag = "Template Service",
    get,
    path = "/templates",
    responses(
        (status = 200, description = "List of all templates", body = [Template])
    )
)]
pub async fn list_templates(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.templates.list())
}

#[utoipa::path(
    context_path = "/api",
    tag = "Template Service",
    post,
    path = "/templates",
    request_body = SaveTemplateRequest,
    responses(
        (status = 201, description = "Template saved successfully", body = Template),
        (status = 400, description = "Invalid template payload", body = ErrorResponse)
    )
)]
pub async fn save_template(
    request: web::Json<SaveTemplateRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServiceError> {
    let stored = state.templates.save(request.into_inner())?;
    log::info!("Template '{}' saved", stored.name);

    // Write-through: the in-memory store is already current, the snapshot
    // write happens in the background worker.
    state.persist_templates().await;

    Ok(HttpResponse::Created().json(stored))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/templates")
            .route(web::get().to(list_templates))
            .route(web::post().to(save_template)),
    );
}
