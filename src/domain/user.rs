use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Gender, Role, UserEmail, UserId, UserName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: UserEmail,
    pub name: UserName,
    pub role: Role,
    pub gender: Option<Gender>,
    /// Partners and stylers may only sign in once an admin approved them.
    pub is_approved: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    /// Taken from the token subject so both systems share the same id.
    pub id: UserId,
    pub email: UserEmail,
    pub name: UserName,
    pub role: Role,
    pub gender: Option<Gender>,
    pub is_approved: bool,
}

impl NewUser {
    /// A pending account with no gender set.
    #[must_use]
    pub fn new(id: UserId, email: UserEmail, name: UserName, role: Role) -> Self {
        Self {
            id,
            email,
            name,
            role,
            gender: None,
            is_approved: false,
        }
    }
}

/// Fields a user may change on their own profile. `None` leaves the value untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateUserProfile {
    pub name: Option<UserName>,
    pub gender: Option<Gender>,
}

/// Account fields an admin may change. `None` leaves the value untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateUser {
    pub name: Option<UserName>,
    pub gender: Option<Gender>,
    pub role: Option<Role>,
    pub is_approved: Option<bool>,
}

impl UpdateUser {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.gender.is_none()
            && self.role.is_none()
            && self.is_approved.is_none()
    }
}
