//! Wardrobe item management for the authenticated user.

use crate::domain::clothing_item::{ClothingItem, UpdateClothingItem};
use crate::domain::types::ClothingItemId;
use crate::forms::clothing_item::{
    AddClothingItemForm, AddClothingItemPayload, UpdateClothingItemForm,
};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{ClothingItemReader, ClothingItemWriter};
use crate::services::{ServiceError, ServiceResult, owner_id};

fn parse_item_id(item_id: i32) -> ServiceResult<ClothingItemId> {
    ClothingItemId::new(item_id).map_err(|_| ServiceError::NotFound)
}

pub fn add_clothing_item<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddClothingItemForm,
) -> ServiceResult<ClothingItem>
where
    R: ClothingItemWriter + ?Sized,
{
    let owner_id = owner_id(user)?;
    let payload = AddClothingItemPayload::try_from(form)?;

    let item = repo.create_clothing_item(&payload.into_domain(owner_id))?;
    log::info!(
        "User {owner_id} added clothing item {} tagged `{}`",
        item.id,
        item.occasion
    );
    Ok(item)
}

/// The requester's wardrobe, newest first.
pub fn list_wardrobe<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<ClothingItem>>
where
    R: ClothingItemReader + ?Sized,
{
    let owner_id = owner_id(user)?;
    Ok(repo.list_clothing_items(owner_id)?)
}

pub fn get_clothing_item<R>(
    repo: &R,
    user: &AuthenticatedUser,
    item_id: i32,
) -> ServiceResult<ClothingItem>
where
    R: ClothingItemReader + ?Sized,
{
    let owner_id = owner_id(user)?;
    repo.get_clothing_item(parse_item_id(item_id)?, owner_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn update_clothing_item<R>(
    repo: &R,
    user: &AuthenticatedUser,
    item_id: i32,
    form: UpdateClothingItemForm,
) -> ServiceResult<ClothingItem>
where
    R: ClothingItemWriter + ?Sized,
{
    let owner_id = owner_id(user)?;
    let item_id = parse_item_id(item_id)?;
    let updates = UpdateClothingItem::try_from(form)?;

    Ok(repo.update_clothing_item(item_id, owner_id, &updates)?)
}

/// Removes the item; occasions referencing it drop it from their clothes list.
pub fn delete_clothing_item<R>(
    repo: &R,
    user: &AuthenticatedUser,
    item_id: i32,
) -> ServiceResult<()>
where
    R: ClothingItemWriter + ?Sized,
{
    let owner_id = owner_id(user)?;
    repo.delete_clothing_item(parse_item_id(item_id)?, owner_id)?;
    Ok(())
}
