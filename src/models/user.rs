//! Diesel models representing user accounts.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{Gender, TypeConstraintError, UserEmail, UserId, UserName};
use crate::domain::user::{
    NewUser as DomainNewUser, UpdateUser as DomainUpdateUser,
    UpdateUserProfile as DomainUpdateUserProfile, User as DomainUser,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
/// Diesel model for [`crate::domain::user::User`].
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: String,
    pub gender: Option<String>,
    pub is_approved: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
/// Insertable form of [`User`].
pub struct NewUser<'a> {
    pub id: i32,
    pub email: &'a str,
    pub name: &'a str,
    pub role: &'a str,
    pub gender: Option<&'a str>,
    pub is_approved: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::users)]
/// Data used when a user edits their own profile.
pub struct UpdateUserProfile<'a> {
    pub name: Option<&'a str>,
    pub gender: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::users)]
/// Data used when an admin edits an account.
pub struct UpdateUser<'a> {
    pub name: Option<&'a str>,
    pub gender: Option<&'a str>,
    pub role: Option<&'a str>,
    pub is_approved: Option<bool>,
}

impl TryFrom<User> for DomainUser {
    type Error = TypeConstraintError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::try_from(user.id)?,
            email: UserEmail::new(user.email)?,
            name: UserName::new(user.name)?,
            role: user.role.parse()?,
            gender: user.gender.map(Gender::new).transpose()?,
            is_approved: user.is_approved,
            created_at: user.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewUser> for NewUser<'a> {
    fn from(user: &'a DomainNewUser) -> Self {
        Self {
            id: user.id.get(),
            email: user.email.as_str(),
            name: user.name.as_str(),
            role: user.role.as_str(),
            gender: user.gender.as_ref().map(Gender::as_str),
            is_approved: user.is_approved,
        }
    }
}

impl<'a> From<&'a DomainUpdateUserProfile> for UpdateUserProfile<'a> {
    fn from(update: &'a DomainUpdateUserProfile) -> Self {
        Self {
            name: update.name.as_ref().map(|name| name.as_str()),
            gender: update.gender.as_ref().map(Gender::as_str),
        }
    }
}

impl<'a> From<&'a DomainUpdateUser> for UpdateUser<'a> {
    fn from(update: &'a DomainUpdateUser) -> Self {
        Self {
            name: update.name.as_ref().map(|name| name.as_str()),
            gender: update.gender.as_ref().map(Gender::as_str),
            role: update.role.map(|role| role.as_str()),
            is_approved: update.is_approved,
        }
    }
}
