//! Services managing the requester's occasions.

use std::collections::HashMap;

use crate::domain::clothing_item::ClothingItem;
use crate::domain::occasion::{Occasion, UpdateOccasion};
use crate::domain::types::{ClothingItemId, OccasionId, UserId};
use crate::dto::occasion::OccasionWithClothes;
use crate::forms::occasion::{CreateOccasionForm, CreateOccasionPayload, UpdateOccasionForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{ClothingItemReader, OccasionReader, OccasionWriter};
use crate::services::{ServiceError, ServiceResult, owner_id};

const FOREIGN_CLOTHES_MESSAGE: &str = "clothesList may only contain items from your own wardrobe";

/// Rejects clothes lists referencing items the owner does not have.
fn ensure_owned_clothes<R>(repo: &R, owner_id: UserId, ids: &[ClothingItemId]) -> ServiceResult<()>
where
    R: ClothingItemReader + ?Sized,
{
    if ids.is_empty() {
        return Ok(());
    }

    let owned = repo.list_clothing_items_by_ids(owner_id, ids)?;
    if owned.len() != ids.len() {
        log::warn!(
            "User {owner_id} referenced {} unknown or foreign clothing items",
            ids.len() - owned.len()
        );
        return Err(ServiceError::Form(FOREIGN_CLOTHES_MESSAGE.to_string()));
    }
    Ok(())
}

/// Pairs each occasion with its clothes, in clothes list order.
fn with_clothes(occasions: Vec<Occasion>, items: Vec<ClothingItem>) -> Vec<OccasionWithClothes> {
    let by_id: HashMap<ClothingItemId, ClothingItem> =
        items.into_iter().map(|item| (item.id, item)).collect();

    occasions
        .into_iter()
        .map(|occasion| {
            let clothes = occasion
                .clothes_list
                .iter()
                .filter_map(|id| by_id.get(id).cloned())
                .collect();
            OccasionWithClothes { occasion, clothes }
        })
        .collect()
}

fn populate<R>(repo: &R, owner_id: UserId, occasion: Occasion) -> ServiceResult<OccasionWithClothes>
where
    R: ClothingItemReader + ?Sized,
{
    let items = repo.list_clothing_items_by_ids(owner_id, &occasion.clothes_list)?;
    with_clothes(vec![occasion], items)
        .pop()
        .ok_or_else(|| ServiceError::Internal("occasion lost while populating".to_string()))
}

fn parse_occasion_id(occasion_id: i32) -> ServiceResult<OccasionId> {
    OccasionId::new(occasion_id).map_err(|_| ServiceError::NotFound)
}

/// Validates the form and stores a new occasion for the requester.
pub fn create_occasion<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: CreateOccasionForm,
) -> ServiceResult<OccasionWithClothes>
where
    R: OccasionWriter + ClothingItemReader + ?Sized,
{
    let owner_id = owner_id(user)?;
    let payload = CreateOccasionPayload::try_from(form)?;

    ensure_owned_clothes(repo, owner_id, &payload.clothes_list)?;

    let occasion = repo.create_occasion(&payload.into_domain(owner_id))?;
    populate(repo, owner_id, occasion)
}

/// Lists the requester's occasions, latest date first.
pub fn list_occasions<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<OccasionWithClothes>>
where
    R: OccasionReader + ClothingItemReader + ?Sized,
{
    let owner_id = owner_id(user)?;
    let occasions = repo.list_occasions(owner_id)?;

    let mut ids: Vec<ClothingItemId> = occasions
        .iter()
        .flat_map(|occasion| occasion.clothes_list.iter().copied())
        .collect();
    ids.sort_unstable();
    ids.dedup();

    let items = repo.list_clothing_items_by_ids(owner_id, &ids)?;
    Ok(with_clothes(occasions, items))
}

pub fn get_occasion<R>(
    repo: &R,
    user: &AuthenticatedUser,
    occasion_id: i32,
) -> ServiceResult<OccasionWithClothes>
where
    R: OccasionReader + ClothingItemReader + ?Sized,
{
    let owner_id = owner_id(user)?;
    let occasion = repo
        .get_occasion(parse_occasion_id(occasion_id)?, owner_id)?
        .ok_or(ServiceError::NotFound)?;

    populate(repo, owner_id, occasion)
}

/// Applies the provided fields; a provided clothes list replaces the old one.
pub fn update_occasion<R>(
    repo: &R,
    user: &AuthenticatedUser,
    occasion_id: i32,
    form: UpdateOccasionForm,
) -> ServiceResult<OccasionWithClothes>
where
    R: OccasionWriter + ClothingItemReader + ?Sized,
{
    let owner_id = owner_id(user)?;
    let occasion_id = parse_occasion_id(occasion_id)?;
    let updates = UpdateOccasion::try_from(form)?;

    if let Some(clothes_list) = &updates.clothes_list {
        ensure_owned_clothes(repo, owner_id, clothes_list)?;
    }

    let occasion = repo.update_occasion(occasion_id, owner_id, &updates)?;
    populate(repo, owner_id, occasion)
}

pub fn delete_occasion<R>(repo: &R, user: &AuthenticatedUser, occasion_id: i32) -> ServiceResult<()>
where
    R: OccasionWriter + ?Sized,
{
    let owner_id = owner_id(user)?;
    repo.delete_occasion(parse_occasion_id(occasion_id)?, owner_id)?;
    Ok(())
}
