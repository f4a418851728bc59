//! Payload returned by the occasion suggestions endpoint.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::occasion::Occasion;
use crate::domain::suggestion::Suggestion;
use crate::domain::types::{OccasionId, OccasionTitle, OccasionType};

/// Echo of the occasion the suggestions were computed for.
#[derive(Debug, Serialize)]
pub struct OccasionSummary {
    pub id: OccasionId,
    pub title: OccasionTitle,
    #[serde(rename = "type")]
    pub occasion_type: OccasionType,
    pub date: NaiveDate,
}

impl From<&Occasion> for OccasionSummary {
    fn from(occasion: &Occasion) -> Self {
        Self {
            id: occasion.id,
            title: occasion.title.clone(),
            occasion_type: occasion.occasion_type.clone(),
            date: occasion.date,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsResponse {
    /// Matching wardrobe items, newest first. Empty when nothing matched.
    pub suggestions: Vec<Suggestion>,
    pub occasion: OccasionSummary,
    /// Requester's recorded gender or `not set`.
    pub user_gender: String,
}
