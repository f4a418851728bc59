//! Bearer-token identity extracted from incoming requests.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError, web};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::types::{Role, TypeConstraintError, UserEmail, UserId, UserName};
use crate::domain::user::NewUser;
use crate::models::config::ServerConfig;

/// Claims carried by the token issued by the authentication service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// User id as a decimal string.
    pub sub: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: usize,
}

impl AuthenticatedUser {
    /// Parses the subject claim into a [`UserId`].
    pub fn user_id(&self) -> Result<UserId, TypeConstraintError> {
        let id = self
            .sub
            .parse::<i32>()
            .map_err(|_| TypeConstraintError::InvalidValue(format!("subject `{}`", self.sub)))?;
        UserId::new(id)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles
            .iter()
            .any(|r| r.parse::<Role>().is_ok_and(|parsed| parsed == role))
    }

    /// The most privileged known role in the claims, `styler` when none is present.
    pub fn primary_role(&self) -> Role {
        [Role::Admin, Role::Partner, Role::Styler]
            .into_iter()
            .find(|role| self.has_role(*role))
            .unwrap_or_default()
    }

    /// Verifies and decodes an HS256 token.
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }

    /// Signs the claims with HS256.
    pub fn to_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }
}

impl TryFrom<&AuthenticatedUser> for NewUser {
    type Error = TypeConstraintError;

    fn try_from(user: &AuthenticatedUser) -> Result<Self, Self::Error> {
        Ok(NewUser::new(
            user.user_id()?,
            UserEmail::new(user.email.as_str())?,
            UserName::new(user.name.as_str())?,
            user.primary_role(),
        ))
    }
}

fn unauthorized(reason: &str) -> actix_web::Error {
    log::debug!("Rejecting request: {reason}");
    InternalError::from_response(
        reason.to_string(),
        HttpResponse::Unauthorized().json(json!({ "error": "Unauthorized" })),
    )
    .into()
}

fn extract_user(req: &HttpRequest) -> Result<AuthenticatedUser, actix_web::Error> {
    let config = req.app_data::<web::Data<ServerConfig>>().ok_or_else(|| {
        log::error!("Server config is not registered as app data");
        actix_web::error::ErrorInternalServerError("Server error")
    })?;

    let header = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| unauthorized("missing authorization header"))?;

    let token = header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| unauthorized("malformed authorization header"))?;

    AuthenticatedUser::from_token(token, &config.secret)
        .map_err(|e| unauthorized(&format!("invalid token: {e}")))
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(extract_user(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str, roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: sub.to_string(),
            email: "styler@example.com".to_string(),
            name: "Styler".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            exp: 4_102_444_800,
        }
    }

    #[test]
    fn token_round_trips_with_same_secret() {
        let user = claims("12", &["styler"]);
        let token = user.to_token("secret").unwrap();
        assert_eq!(AuthenticatedUser::from_token(&token, "secret").unwrap(), user);
        assert!(AuthenticatedUser::from_token(&token, "other").is_err());
    }

    #[test]
    fn subject_must_be_a_positive_id() {
        assert_eq!(claims("12", &[]).user_id().unwrap().get(), 12);
        assert!(claims("abc", &[]).user_id().is_err());
        assert!(claims("0", &[]).user_id().is_err());
    }

    #[test]
    fn primary_role_prefers_admin() {
        assert_eq!(claims("1", &["styler", "admin"]).primary_role(), Role::Admin);
        assert_eq!(claims("1", &["partner"]).primary_role(), Role::Partner);
        assert_eq!(claims("1", &["unknown"]).primary_role(), Role::Styler);
    }
}
