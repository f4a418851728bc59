use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;

use crate::forms::occasion::{CreateOccasionForm, UpdateOccasionForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{error_response, status_for};
use crate::services::{ServiceError, occasions as occasions_service, suggestions};

const RESOURCE: &str = "Occasion";

#[get("/occasions/{occasion_id}/suggestions")]
pub async fn occasion_suggestions(
    occasion_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let occasion_id = occasion_id.into_inner();
    match suggestions::suggest_for_occasion(repo.get_ref(), &user, occasion_id) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(json!({ "error": "Occasion not found" }))
        }
        Err(err) if status_for(&err).is_server_error() => {
            log::error!("Failed to suggest outfits for occasion {occasion_id}: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": format!("Server error: {err}") }))
        }
        Err(err) => error_response(RESOURCE, "suggest outfits", err),
    }
}

#[post("/occasions")]
pub async fn create_occasion(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateOccasionForm>,
) -> impl Responder {
    match occasions_service::create_occasion(repo.get_ref(), &user, form) {
        Ok(occasion) => HttpResponse::Created().json(json!({ "occasion": occasion })),
        Err(err) => error_response(RESOURCE, "create occasion", err),
    }
}

#[get("/occasions")]
pub async fn list_occasions(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match occasions_service::list_occasions(repo.get_ref(), &user) {
        Ok(occasions) => HttpResponse::Ok().json(json!({ "data": occasions })),
        Err(err) => error_response(RESOURCE, "list occasions", err),
    }
}

#[get("/occasions/{occasion_id}")]
pub async fn show_occasion(
    occasion_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match occasions_service::get_occasion(repo.get_ref(), &user, occasion_id.into_inner()) {
        Ok(occasion) => HttpResponse::Ok().json(json!({ "occasion": occasion })),
        Err(err) => error_response(RESOURCE, "load occasion", err),
    }
}

#[put("/occasions/{occasion_id}")]
pub async fn update_occasion(
    occasion_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateOccasionForm>,
) -> impl Responder {
    match occasions_service::update_occasion(repo.get_ref(), &user, occasion_id.into_inner(), form)
    {
        Ok(occasion) => HttpResponse::Ok().json(json!({ "occasion": occasion })),
        Err(err) => error_response(RESOURCE, "update occasion", err),
    }
}

#[delete("/occasions/{occasion_id}")]
pub async fn delete_occasion(
    occasion_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match occasions_service::delete_occasion(repo.get_ref(), &user, occasion_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "Occasion deleted" })),
        Err(err) => error_response(RESOURCE, "delete occasion", err),
    }
}
