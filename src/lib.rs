use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpResponse, HttpServer, Responder};
use actix_web_prometheus::PrometheusMetricsBuilder;
use env_logger::Env;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod generate;
pub mod seed;
pub mod state;
pub mod storage;
pub mod template;
pub mod user;

pub use crate::error::ServiceError;
pub use crate::state::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Health",
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up")
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("Server is running")
}

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::health,
            crate::template::handlers::list_templates,
            crate::template::handlers::save_template,
            crate::user::handlers::list_users,
            crate::generate::handlers::generate_pdf,
        ),
        components(
            schemas(
                template::models::Template,
                template::models::SaveTemplateRequest,
                template::models::Sections,
                template::models::Field,
                template::models::Alignment,
                template::models::DataBinding,
                user::models::User,
                generate::GenerationRequest,
                ErrorResponse,
            )
        ),
        tags(
            (name = "Template Service", description = "Template definition endpoints."),
            (name = "User Service", description = "User data context endpoints."),
            (name = "Generation Service", description = "PDF generation endpoint."),
            (name = "Health", description = "Liveness probe.")
        )
    )]
    struct ApiDoc;

    let server_config = config::ServerConfig::from_env();
    let storage: Arc<dyn storage::SnapshotStorage + Send + Sync> =
        Arc::new(storage::FileStorage::new(&server_config.data_dir));

    let app_state = web::Data::new(AppState::new(storage).await);
    if server_config.seed_sample_data {
        seed::seed_sample_data(&app_state);
        app_state.persist_templates().await;
    }

    let prometheus = PrometheusMetricsBuilder::new("pdf_template_server")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    log::info!(
        "Starting server at http://{}:{}",
        server_config.host,
        server_config.port
    );

    let bind_addr = (server_config.host.clone(), server_config.port);
    HttpServer::new(move || {
        let app_state = app_state.clone();
        let prometheus = prometheus.clone();
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:5173")
            .allowed_origin("http://localhost:8081")
            .allowed_origin("http://localhost:19006")
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(app_state)
            .app_data(web::JsonConfig::default().limit(2 * 1024 * 1024))
            .service(
                web::scope("/api")
                    .service(web::resource("/health").route(web::get().to(health)))
                    .configure(template::handlers::config)
                    .configure(user::handlers::config)
                    .configure(generate::handlers::config),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind(bind_addr)?
    .run()
    .await
}
