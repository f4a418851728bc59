//! Occasion payloads with their clothes list resolved to wardrobe items.

use serde::Serialize;

use crate::domain::clothing_item::ClothingItem;
use crate::domain::occasion::Occasion;

#[derive(Debug, Serialize)]
pub struct OccasionWithClothes {
    #[serde(flatten)]
    pub occasion: Occasion,
    /// Items from `clothesList`, in list order.
    pub clothes: Vec<ClothingItem>,
}
