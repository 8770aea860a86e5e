use actix_web::{web, HttpResponse};

use crate::user::models::User;
use crate::AppState;

#[utoipa::path(
    context_path = "/api",
    tag = "User Service",
    get,
    path = "/users",
    responses(
        (status = 200, description = "List of all users", body = [User])
    )
)]
pub async fn list_users(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.users.list())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/users").route(web::get().to(list_users)));
}
