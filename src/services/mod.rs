//! Business workflows invoked by the HTTP routes and the CLIs.

use crate::domain::types::{Role, UserId};
use crate::models::auth::AuthenticatedUser;

pub mod errors;
pub mod favorites;
pub mod occasions;
pub mod suggestions;
pub mod users;
pub mod wardrobe;

pub use errors::{ServiceError, ServiceResult};

/// Fails with [`ServiceError::Unauthorized`] unless the user holds `role`.
pub fn ensure_role(user: &AuthenticatedUser, role: Role) -> ServiceResult<()> {
    if user.has_role(role) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// The requester's id; every owned resource is looked up with it.
pub(crate) fn owner_id(user: &AuthenticatedUser) -> ServiceResult<UserId> {
    user.user_id().map_err(|err| {
        log::warn!("Token subject is not a valid user id: {err}");
        ServiceError::Unauthorized
    })
}

#[cfg(all(test, feature = "test-mocks"))]
pub(crate) mod test_support {
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::clothing_item::ClothingItem;
    use crate::domain::occasion::Occasion;
    use crate::domain::types::{
        Category, ClothingItemId, ClothingName, ClothingOccasion, Color, ImageUrl, OccasionId,
        OccasionTitle, OccasionType, UserId,
    };
    use crate::models::auth::AuthenticatedUser;

    pub fn styler(id: i32) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: id.to_string(),
            email: format!("styler{id}@example.com"),
            name: format!("Styler {id}"),
            roles: vec!["styler".to_string()],
            exp: 0,
        }
    }

    pub fn admin(id: i32) -> AuthenticatedUser {
        AuthenticatedUser {
            roles: vec!["admin".to_string()],
            ..styler(id)
        }
    }

    pub fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, d)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .expect("valid timestamp")
    }

    pub fn occasion(id: i32, owner: i32, occasion_type: &str) -> Occasion {
        Occasion {
            id: OccasionId::new(id).unwrap(),
            owner_id: UserId::new(owner).unwrap(),
            title: OccasionTitle::new("Saturday plans").unwrap(),
            occasion_type: OccasionType::new(occasion_type),
            date: NaiveDate::from_ymd_opt(2026, 4, 18).unwrap(),
            location: None,
            dress_code: None,
            notes: None,
            skin_tone: None,
            clothes_list: Vec::new(),
            created_at: day(1),
            updated_at: day(1),
        }
    }

    pub fn item(id: i32, owner: i32, tag: &str, created_day: u32) -> ClothingItem {
        ClothingItem {
            id: ClothingItemId::new(id).unwrap(),
            owner_id: UserId::new(owner).unwrap(),
            name: ClothingName::new(format!("Item {id}")).unwrap(),
            category: Category::new("Dress").unwrap(),
            color: Color::new("Pink").unwrap(),
            occasion: ClothingOccasion::new(tag).unwrap(),
            gender: None,
            price: None,
            image: ImageUrl::new(format!("https://img.example.com/{id}.jpg")).unwrap(),
            created_at: day(created_day),
            updated_at: day(created_day),
        }
    }
}
