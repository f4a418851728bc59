//! JSON HTTP handlers.

use actix_web::{HttpRequest, HttpResponse, error, http::StatusCode};
use serde_json::json;

use crate::services::ServiceError;

pub mod occasions;
pub mod users;
pub mod wardrobe;

/// Status code reported for each service failure.
pub fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
        ServiceError::Forbidden => StatusCode::FORBIDDEN,
        ServiceError::NotFound => StatusCode::NOT_FOUND,
        ServiceError::Form(_) | ServiceError::TypeConstraint(_) => StatusCode::BAD_REQUEST,
        ServiceError::Repository(_) | ServiceError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Renders `err` as `{"error": ...}`. Server errors are logged with `action`
/// and their cause is not exposed.
pub fn error_response(resource: &str, action: &str, err: ServiceError) -> HttpResponse {
    let status = status_for(&err);
    let message = match &err {
        ServiceError::NotFound => format!("{resource} not found"),
        _ if status.is_server_error() => {
            log::error!("Failed to {action}: {err}");
            "Server error".to_string()
        }
        _ => err.to_string(),
    };
    HttpResponse::build(status).json(json!({ "error": message }))
}

/// Malformed JSON bodies get the same `{"error": ...}` shape as other failures.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let message = format!("Invalid request body: {err}");
    let response = HttpResponse::BadRequest().json(json!({ "error": message }));
    error::InternalError::from_response(err, response).into()
}

/// Resource named in "not found" bodies for a request path.
fn resource_for_path(path: &str) -> &'static str {
    if path.starts_with("/occasions") {
        "Occasion"
    } else if path.starts_with("/wardrobe") || path.starts_with("/users/favorites") {
        "Clothing item"
    } else if path.starts_with("/users") {
        "User"
    } else {
        "Resource"
    }
}

/// Ids that do not parse can never match a row, so they are reported as 404.
pub fn path_error_handler(err: error::PathError, req: &HttpRequest) -> error::Error {
    log::debug!("Rejecting path {}: {err}", req.path());
    let message = format!("{} not found", resource_for_path(req.path()));
    let response = HttpResponse::NotFound().json(json!({ "error": message }));
    error::InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;

    #[test]
    fn service_errors_map_to_status_codes() {
        assert_eq!(status_for(&ServiceError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(&ServiceError::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(status_for(&ServiceError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&ServiceError::Form("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ServiceError::Repository(RepositoryError::Unexpected(
                "boom".into()
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn path_resources_are_named_by_prefix() {
        assert_eq!(resource_for_path("/occasions/abc/suggestions"), "Occasion");
        assert_eq!(resource_for_path("/wardrobe/x"), "Clothing item");
        assert_eq!(resource_for_path("/users/favorites/x"), "Clothing item");
        assert_eq!(resource_for_path("/users/x"), "User");
    }

    #[test]
    fn error_bodies_follow_status() {
        let response = error_response("Occasion", "load occasion", ServiceError::NotFound);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = error_response(
            "Occasion",
            "load occasion",
            ServiceError::Internal("pool closed".into()),
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
