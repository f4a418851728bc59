//! DTOs returned by the favorites endpoints.

use serde::Serialize;

use crate::domain::types::ClothingItemId;

/// State of an item after its favorite flag was toggled.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteToggle {
    pub clothing_item_id: ClothingItemId,
    pub favorited: bool,
}
