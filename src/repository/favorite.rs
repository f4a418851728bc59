//! Repository implementation for favorited wardrobe items.

use chrono::Utc;
use diesel::prelude::*;

use crate::{
    domain::{
        clothing_item::ClothingItem,
        types::{ClothingItemId, UserId},
    },
    models::{clothing_item::ClothingItem as DbClothingItem, favorite::NewUserFavorite},
    repository::{
        DieselRepository, FavoriteReader, FavoriteWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl FavoriteReader for DieselRepository {
    fn list_favorite_items(&self, user_id: UserId) -> RepositoryResult<Vec<ClothingItem>> {
        use crate::schema::{clothing_items, user_favorites};

        let mut conn = self.conn()?;
        let items = user_favorites::table
            .inner_join(clothing_items::table)
            .filter(user_favorites::user_id.eq(user_id.get()))
            .filter(clothing_items::owner_id.eq(user_id.get()))
            .order((
                user_favorites::created_at.desc(),
                user_favorites::clothing_item_id.desc(),
            ))
            .select(DbClothingItem::as_select())
            .load::<DbClothingItem>(&mut conn)?;

        items
            .into_iter()
            .map(|item| ClothingItem::try_from(item).map_err(RepositoryError::from))
            .collect()
    }
}

impl FavoriteWriter for DieselRepository {
    fn toggle_favorite(&self, user_id: UserId, item_id: ClothingItemId) -> RepositoryResult<bool> {
        use crate::schema::user_favorites;

        let mut conn = self.conn()?;
        let favorite = NewUserFavorite::new(user_id, item_id, Utc::now().naive_utc());

        let favorited = conn.transaction::<bool, diesel::result::Error, _>(|conn| {
            let removed = diesel::delete(
                user_favorites::table.find((user_id.get(), item_id.get())),
            )
            .execute(conn)?;
            if removed > 0 {
                return Ok(false);
            }

            diesel::insert_into(user_favorites::table)
                .values(&favorite)
                .execute(conn)?;
            Ok(true)
        })?;

        Ok(favorited)
    }
}
