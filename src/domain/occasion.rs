use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ClothingItemId, OccasionDetail, OccasionId, OccasionNotes, OccasionTitle, OccasionType, UserId,
};

/// An event the user needs an outfit for.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Occasion {
    pub id: OccasionId,
    pub owner_id: UserId,
    pub title: OccasionTitle,
    #[serde(rename = "type")]
    pub occasion_type: OccasionType,
    pub date: NaiveDate,
    pub location: Option<OccasionDetail>,
    pub dress_code: Option<OccasionDetail>,
    pub notes: Option<OccasionNotes>,
    pub skin_tone: Option<OccasionDetail>,
    /// Wardrobe items picked for this occasion, in the order they were chosen.
    pub clothes_list: Vec<ClothingItemId>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewOccasion {
    pub owner_id: UserId,
    pub title: OccasionTitle,
    pub occasion_type: OccasionType,
    pub date: NaiveDate,
    pub location: Option<OccasionDetail>,
    pub dress_code: Option<OccasionDetail>,
    pub notes: Option<OccasionNotes>,
    pub skin_tone: Option<OccasionDetail>,
    pub clothes_list: Vec<ClothingItemId>,
}

impl NewOccasion {
    /// Creates a bare occasion; optional attributes are filled in by the caller.
    #[must_use]
    pub fn new(
        owner_id: UserId,
        title: OccasionTitle,
        occasion_type: OccasionType,
        date: NaiveDate,
    ) -> Self {
        Self {
            owner_id,
            title,
            occasion_type,
            date,
            location: None,
            dress_code: None,
            notes: None,
            skin_tone: None,
            clothes_list: Vec::new(),
        }
    }
}

/// Partial update of an occasion. A provided `clothes_list` replaces the stored one.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateOccasion {
    pub title: Option<OccasionTitle>,
    pub occasion_type: Option<OccasionType>,
    pub date: Option<NaiveDate>,
    pub location: Option<OccasionDetail>,
    pub dress_code: Option<OccasionDetail>,
    pub notes: Option<OccasionNotes>,
    pub skin_tone: Option<OccasionDetail>,
    pub clothes_list: Option<Vec<ClothingItemId>>,
}
