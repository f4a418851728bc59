//! Persistence traits and their Diesel-backed implementation.
//!
//! Every read and write that touches wardrobe items or occasions takes the
//! owner id and filters on it inside the query, so callers never see rows
//! belonging to another user.

use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        clothing_item::{ClothingItem, NewClothingItem, UpdateClothingItem},
        occasion::{NewOccasion, Occasion, UpdateOccasion},
        suggestion::TargetTag,
        types::{ClothingItemId, OccasionId, UserEmail, UserId},
        user::{NewUser, UpdateUser, UpdateUserProfile, User},
    },
    repository::errors::RepositoryResult,
};

pub mod clothing_item;
pub mod errors;
pub mod favorite;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod occasion;
pub mod user;

/// Diesel repository shared by handlers and command line tools.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait UserReader {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;
    fn get_user_by_email(&self, email: &UserEmail) -> RepositoryResult<Option<User>>;
    /// All users, newest first.
    fn list_users(&self) -> RepositoryResult<Vec<User>>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    fn update_user_profile(&self, id: UserId, updates: &UpdateUserProfile)
    -> RepositoryResult<User>;
    fn set_user_approved(&self, id: UserId, approved: bool) -> RepositoryResult<User>;
    fn update_user(&self, id: UserId, updates: &UpdateUser) -> RepositoryResult<User>;
    /// Removes the account together with its favorites.
    fn delete_user(&self, id: UserId) -> RepositoryResult<()>;
}

pub trait FavoriteReader {
    /// The user's favorited wardrobe items, most recently favorited first.
    fn list_favorite_items(&self, user_id: UserId) -> RepositoryResult<Vec<ClothingItem>>;
}

pub trait FavoriteWriter {
    /// Adds the item to the user's favorites or removes it if already there.
    /// Returns whether the item is a favorite afterwards.
    fn toggle_favorite(&self, user_id: UserId, item_id: ClothingItemId) -> RepositoryResult<bool>;
}

pub trait ClothingItemReader {
    fn get_clothing_item(
        &self,
        id: ClothingItemId,
        owner_id: UserId,
    ) -> RepositoryResult<Option<ClothingItem>>;
    /// The owner's wardrobe, newest first.
    fn list_clothing_items(&self, owner_id: UserId) -> RepositoryResult<Vec<ClothingItem>>;
    /// The owner's items among `ids`; unknown or foreign ids are skipped.
    fn list_clothing_items_by_ids(
        &self,
        owner_id: UserId,
        ids: &[ClothingItemId],
    ) -> RepositoryResult<Vec<ClothingItem>>;
    /// Items whose occasion tag contains `tag`, case-insensitively, newest first.
    fn find_clothing_items_by_tag(
        &self,
        owner_id: UserId,
        tag: &TargetTag,
    ) -> RepositoryResult<Vec<ClothingItem>>;
    /// Number of items whose occasion tag equals `tag` exactly.
    fn count_clothing_items_with_exact_tag(
        &self,
        owner_id: UserId,
        tag: &TargetTag,
    ) -> RepositoryResult<usize>;
    /// Distinct occasion tags present in the owner's wardrobe, sorted.
    fn list_distinct_clothing_tags(&self, owner_id: UserId) -> RepositoryResult<Vec<String>>;
}

pub trait ClothingItemWriter {
    fn create_clothing_item(&self, new_item: &NewClothingItem) -> RepositoryResult<ClothingItem>;
    fn update_clothing_item(
        &self,
        id: ClothingItemId,
        owner_id: UserId,
        updates: &UpdateClothingItem,
    ) -> RepositoryResult<ClothingItem>;
    fn delete_clothing_item(&self, id: ClothingItemId, owner_id: UserId) -> RepositoryResult<()>;
}

pub trait OccasionReader {
    fn get_occasion(&self, id: OccasionId, owner_id: UserId)
    -> RepositoryResult<Option<Occasion>>;
    /// The owner's occasions, latest date first.
    fn list_occasions(&self, owner_id: UserId) -> RepositoryResult<Vec<Occasion>>;
}

pub trait OccasionWriter {
    fn create_occasion(&self, new_occasion: &NewOccasion) -> RepositoryResult<Occasion>;
    fn update_occasion(
        &self,
        id: OccasionId,
        owner_id: UserId,
        updates: &UpdateOccasion,
    ) -> RepositoryResult<Occasion>;
    fn delete_occasion(&self, id: OccasionId, owner_id: UserId) -> RepositoryResult<()>;
}
