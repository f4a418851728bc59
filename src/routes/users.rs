use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;

use crate::forms::user::{CreateUserForm, UpdateProfileForm, UpdateUserForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::{favorites as favorites_service, users as users_service};

const RESOURCE: &str = "User";
const FAVORITE_RESOURCE: &str = "Clothing item";

#[get("/users/profile")]
pub async fn show_my_profile(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users_service::get_my_profile(repo.get_ref(), &user) {
        Ok(profile) => HttpResponse::Ok().json(json!({ "user": profile })),
        Err(err) => error_response(RESOURCE, "load profile", err),
    }
}

#[put("/users/profile")]
pub async fn update_my_profile(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateProfileForm>,
) -> impl Responder {
    match users_service::update_my_profile(repo.get_ref(), &user, form) {
        Ok(profile) => HttpResponse::Ok().json(json!({ "user": profile })),
        Err(err) => error_response(RESOURCE, "update profile", err),
    }
}

#[post("/users/favorites/{item_id}")]
pub async fn toggle_favorite(
    item_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match favorites_service::toggle_favorite(repo.get_ref(), &user, item_id.into_inner()) {
        Ok(toggled) => HttpResponse::Ok().json(toggled),
        Err(err) => error_response(FAVORITE_RESOURCE, "toggle favorite", err),
    }
}

#[get("/users/favorites")]
pub async fn list_favorites(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match favorites_service::list_favorites(repo.get_ref(), &user) {
        Ok(items) => HttpResponse::Ok().json(json!({ "data": items })),
        Err(err) => error_response(FAVORITE_RESOURCE, "list favorites", err),
    }
}

#[get("/users/profile/{user_id}")]
pub async fn show_profile(
    user_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users_service::get_profile(repo.get_ref(), &user, user_id.into_inner()) {
        Ok(profile) => HttpResponse::Ok().json(json!({ "user": profile })),
        Err(err) => error_response(RESOURCE, "load profile", err),
    }
}

#[get("/users")]
pub async fn list_users(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users_service::list_users(repo.get_ref(), &user) {
        Ok(users) => HttpResponse::Ok().json(json!({ "data": users })),
        Err(err) => error_response(RESOURCE, "list users", err),
    }
}

#[post("/users")]
pub async fn create_user(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateUserForm>,
) -> impl Responder {
    match users_service::create_user(repo.get_ref(), &user, form) {
        Ok(created) => HttpResponse::Created().json(json!({ "user": created })),
        Err(err) => error_response(RESOURCE, "create user", err),
    }
}

#[get("/users/{user_id}")]
pub async fn show_user(
    user_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users_service::get_user(repo.get_ref(), &user, user_id.into_inner()) {
        Ok(found) => HttpResponse::Ok().json(json!({ "user": found })),
        Err(err) => error_response(RESOURCE, "load user", err),
    }
}

#[put("/users/{user_id}")]
pub async fn update_user(
    user_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateUserForm>,
) -> impl Responder {
    match users_service::update_user(repo.get_ref(), &user, user_id.into_inner(), form) {
        Ok(updated) => HttpResponse::Ok().json(json!({ "user": updated })),
        Err(err) => error_response(RESOURCE, "update user", err),
    }
}

#[delete("/users/{user_id}")]
pub async fn delete_user(
    user_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users_service::delete_user(repo.get_ref(), &user, user_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "User deleted" })),
        Err(err) => error_response(RESOURCE, "delete user", err),
    }
}
