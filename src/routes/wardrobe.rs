use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;

use crate::forms::clothing_item::{AddClothingItemForm, UpdateClothingItemForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::wardrobe as wardrobe_service;

const RESOURCE: &str = "Clothing item";

#[post("/wardrobe")]
pub async fn add_clothing_item(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddClothingItemForm>,
) -> impl Responder {
    match wardrobe_service::add_clothing_item(repo.get_ref(), &user, form) {
        Ok(item) => HttpResponse::Created().json(json!({ "item": item })),
        Err(err) => error_response(RESOURCE, "add clothing item", err),
    }
}

#[get("/wardrobe")]
pub async fn list_wardrobe(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match wardrobe_service::list_wardrobe(repo.get_ref(), &user) {
        Ok(items) => HttpResponse::Ok().json(json!({ "data": items })),
        Err(err) => error_response(RESOURCE, "list wardrobe", err),
    }
}

#[get("/wardrobe/{item_id}")]
pub async fn show_clothing_item(
    item_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match wardrobe_service::get_clothing_item(repo.get_ref(), &user, item_id.into_inner()) {
        Ok(item) => HttpResponse::Ok().json(json!({ "item": item })),
        Err(err) => error_response(RESOURCE, "load clothing item", err),
    }
}

#[put("/wardrobe/{item_id}")]
pub async fn update_clothing_item(
    item_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateClothingItemForm>,
) -> impl Responder {
    match wardrobe_service::update_clothing_item(repo.get_ref(), &user, item_id.into_inner(), form)
    {
        Ok(item) => HttpResponse::Ok().json(json!({ "item": item })),
        Err(err) => error_response(RESOURCE, "update clothing item", err),
    }
}

#[delete("/wardrobe/{item_id}")]
pub async fn delete_clothing_item(
    item_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match wardrobe_service::delete_clothing_item(repo.get_ref(), &user, item_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "Clothing item deleted" })),
        Err(err) => error_response(RESOURCE, "delete clothing item", err),
    }
}
