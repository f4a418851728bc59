//! Favorite marks on the requester's own wardrobe items.

use crate::domain::clothing_item::ClothingItem;
use crate::domain::types::ClothingItemId;
use crate::dto::favorite::FavoriteToggle;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{ClothingItemReader, FavoriteReader, FavoriteWriter};
use crate::services::{ServiceError, ServiceResult, owner_id};

/// Flips the favorite mark on one of the requester's items.
pub fn toggle_favorite<R>(
    repo: &R,
    user: &AuthenticatedUser,
    item_id: i32,
) -> ServiceResult<FavoriteToggle>
where
    R: ClothingItemReader + FavoriteWriter + ?Sized,
{
    let owner_id = owner_id(user)?;
    let item_id = ClothingItemId::new(item_id).map_err(|_| ServiceError::NotFound)?;

    if repo.get_clothing_item(item_id, owner_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let favorited = repo.toggle_favorite(owner_id, item_id)?;
    log::debug!("User {owner_id} set favorite on item {item_id} to {favorited}");

    Ok(FavoriteToggle {
        clothing_item_id: item_id,
        favorited,
    })
}

pub fn list_favorites<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<ClothingItem>>
where
    R: FavoriteReader + ?Sized,
{
    let owner_id = owner_id(user)?;
    Ok(repo.list_favorite_items(owner_id)?)
}
