use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    Category, ClothingItemId, ClothingName, ClothingOccasion, Color, Gender, ImageUrl, Price,
    UserId,
};

/// A single garment in a user's wardrobe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: ClothingItemId,
    pub owner_id: UserId,
    pub name: ClothingName,
    pub category: Category,
    pub color: Color,
    /// Free-text tag matched against occasion types when suggesting outfits.
    pub occasion: ClothingOccasion,
    pub gender: Option<Gender>,
    pub price: Option<Price>,
    pub image: ImageUrl,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewClothingItem {
    pub owner_id: UserId,
    pub name: ClothingName,
    pub category: Category,
    pub color: Color,
    pub occasion: ClothingOccasion,
    pub gender: Option<Gender>,
    pub price: Option<Price>,
    pub image: ImageUrl,
    pub created_at: NaiveDateTime,
}

impl NewClothingItem {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        owner_id: UserId,
        name: ClothingName,
        category: Category,
        color: Color,
        occasion: ClothingOccasion,
        gender: Option<Gender>,
        price: Option<Price>,
        image: ImageUrl,
    ) -> Self {
        Self {
            owner_id,
            name,
            category,
            color,
            occasion,
            gender,
            price,
            image,
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Overrides the creation timestamp, e.g. when importing existing records.
    #[must_use]
    pub fn created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }
}

/// Partial update of a wardrobe item. `None` leaves the stored value as is.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateClothingItem {
    pub name: Option<ClothingName>,
    pub category: Option<Category>,
    pub color: Option<Color>,
    pub occasion: Option<ClothingOccasion>,
    pub gender: Option<Gender>,
    pub price: Option<Price>,
    pub image: Option<ImageUrl>,
}
