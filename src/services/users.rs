//! Profile and account administration services.

use crate::domain::types::{Role, UserEmail, UserId};
use crate::domain::user::{NewUser, UpdateUser, UpdateUserProfile, User};
use crate::dto::user::ApprovalOutcome;
use crate::forms::user::{CreateUserForm, UpdateProfileForm, UpdateUserForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::errors::RepositoryError;
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role, owner_id};

/// Loads the caller's record, creating it from the token claims on first access.
pub fn get_my_profile<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    let user_id = owner_id(user)?;
    if let Some(existing) = repo.get_user_by_id(user_id)? {
        return Ok(existing);
    }

    let new_user = NewUser::try_from(user)?;
    let created = repo.create_user(&new_user)?;
    log::info!("Registered user {} ({})", created.id, created.email);
    Ok(created)
}

pub fn update_my_profile<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: UpdateProfileForm,
) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    let updates = UpdateUserProfile::try_from(form)?;
    let current = get_my_profile(repo, user)?;

    Ok(repo.update_user_profile(current.id, &updates)?)
}

/// A profile by id. Users may only read their own, admins included; any
/// other id, valid or not, is forbidden.
pub fn get_profile<R>(repo: &R, user: &AuthenticatedUser, profile_id: i32) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    if owner_id(user)?.get() != profile_id {
        return Err(ServiceError::Forbidden);
    }
    get_my_profile(repo, user)
}

/// Every account, newest first. Admins only.
pub fn list_users<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<User>>
where
    R: UserReader + ?Sized,
{
    ensure_role(user, Role::Admin)?;
    Ok(repo.list_users()?)
}

fn parse_user_id(user_id: i32) -> ServiceResult<UserId> {
    UserId::new(user_id).map_err(|_| ServiceError::NotFound)
}

/// Creates an account ahead of its first sign-in. Admins only.
pub fn create_user<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: CreateUserForm,
) -> ServiceResult<User>
where
    R: UserWriter + ?Sized,
{
    ensure_role(user, Role::Admin)?;
    let new_user = NewUser::try_from(form)?;

    let created = repo.create_user(&new_user).map_err(|err| match err {
        RepositoryError::ConstraintViolation(_) => {
            ServiceError::Form("A user with this id or email already exists".into())
        }
        other => other.into(),
    })?;
    log::info!("Admin created user {} ({})", created.id, created.email);
    Ok(created)
}

/// Any account by id. Admins only.
pub fn get_user<R>(repo: &R, user: &AuthenticatedUser, user_id: i32) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    ensure_role(user, Role::Admin)?;
    repo.get_user_by_id(parse_user_id(user_id)?)?
        .ok_or(ServiceError::NotFound)
}

/// Edits name, gender, role or approval of any account. Admins only.
pub fn update_user<R>(
    repo: &R,
    user: &AuthenticatedUser,
    user_id: i32,
    form: UpdateUserForm,
) -> ServiceResult<User>
where
    R: UserWriter + ?Sized,
{
    ensure_role(user, Role::Admin)?;
    let user_id = parse_user_id(user_id)?;
    let updates = UpdateUser::try_from(form)?;

    let updated = repo.update_user(user_id, &updates)?;
    log::info!("Admin updated user {}", updated.id);
    Ok(updated)
}

/// Removes an account and its favorites. Wardrobe items and occasions stay
/// keyed to the id so a returning user finds them again.
pub fn delete_user<R>(repo: &R, user: &AuthenticatedUser, user_id: i32) -> ServiceResult<()>
where
    R: UserWriter + ?Sized,
{
    ensure_role(user, Role::Admin)?;
    let user_id = parse_user_id(user_id)?;

    repo.delete_user(user_id)?;
    log::info!("Admin deleted user {user_id}");
    Ok(())
}

/// Marks the account with `email` as approved.
pub fn approve_user_by_email<R>(repo: &R, email: &str) -> ServiceResult<ApprovalOutcome>
where
    R: UserReader + UserWriter + ?Sized,
{
    let email = UserEmail::new(email)?;
    let user = repo
        .get_user_by_email(&email)?
        .ok_or(ServiceError::NotFound)?;

    if user.is_approved {
        return Ok(ApprovalOutcome::AlreadyApproved(user));
    }

    let approved = repo.set_user_approved(user.id, true)?;
    log::info!("Approved user {} ({})", approved.id, approved.email);
    Ok(ApprovalOutcome::Approved(approved))
}
