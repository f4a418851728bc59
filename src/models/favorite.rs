//! Diesel models for favorited wardrobe items.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{ClothingItemId, UserId};

#[derive(Insertable)]
#[diesel(table_name = crate::schema::user_favorites)]
pub struct NewUserFavorite {
    pub user_id: i32,
    pub clothing_item_id: i32,
    pub created_at: NaiveDateTime,
}

impl NewUserFavorite {
    pub fn new(user_id: UserId, clothing_item_id: ClothingItemId, created_at: NaiveDateTime) -> Self {
        Self {
            user_id: user_id.get(),
            clothing_item_id: clothing_item_id.get(),
            created_at,
        }
    }
}
