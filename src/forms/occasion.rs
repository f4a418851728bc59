//! Request bodies for creating and editing occasions.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use crate::domain::occasion::{NewOccasion, UpdateOccasion};
use crate::domain::types::{
    ClothingItemId, OccasionDetail, OccasionNotes, OccasionTitle, OccasionType, UserId,
};
use crate::forms::{FormError, field_error, optional_field, parse_clothes_list};

/// Accepts plain dates as well as full RFC 3339 timestamps sent by browsers.
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, FormError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| FormError::InvalidDate(value.to_string()))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOccasionForm {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub occasion_type: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub dress_code: Option<String>,
    pub notes: Option<String>,
    pub skin_tone: Option<String>,
    pub clothes_list: Option<Vec<i32>>,
}

/// Validated occasion ready to be attached to its owner.
pub struct CreateOccasionPayload {
    pub title: OccasionTitle,
    pub occasion_type: OccasionType,
    pub date: NaiveDate,
    pub location: Option<OccasionDetail>,
    pub dress_code: Option<OccasionDetail>,
    pub notes: Option<OccasionNotes>,
    pub skin_tone: Option<OccasionDetail>,
    pub clothes_list: Vec<ClothingItemId>,
}

impl TryFrom<CreateOccasionForm> for CreateOccasionPayload {
    type Error = FormError;

    fn try_from(form: CreateOccasionForm) -> Result<Self, Self::Error> {
        let title = form.title.filter(|t| !t.trim().is_empty());
        let date = form.date.filter(|d| !d.trim().is_empty());
        let (Some(title), Some(date)) = (title, date) else {
            return Err(FormError::MissingTitleOrDate);
        };

        Ok(Self {
            title: OccasionTitle::new(title).map_err(field_error("title"))?,
            occasion_type: form.occasion_type.map(OccasionType::new).unwrap_or_default(),
            date: parse_date(&date)?,
            location: optional_field(form.location, "location", OccasionDetail::new)?,
            dress_code: optional_field(form.dress_code, "dressCode", OccasionDetail::new)?,
            notes: optional_field(form.notes, "notes", OccasionNotes::new)?,
            skin_tone: optional_field(form.skin_tone, "skinTone", OccasionDetail::new)?,
            clothes_list: parse_clothes_list(form.clothes_list.as_deref().unwrap_or_default())?,
        })
    }
}

impl CreateOccasionPayload {
    pub fn into_domain(self, owner_id: UserId) -> NewOccasion {
        NewOccasion {
            location: self.location,
            dress_code: self.dress_code,
            notes: self.notes,
            skin_tone: self.skin_tone,
            clothes_list: self.clothes_list,
            ..NewOccasion::new(owner_id, self.title, self.occasion_type, self.date)
        }
    }
}

/// Partial update; absent keys leave the stored values untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOccasionForm {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub occasion_type: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub dress_code: Option<String>,
    pub notes: Option<String>,
    pub skin_tone: Option<String>,
    pub clothes_list: Option<Vec<i32>>,
}

impl TryFrom<UpdateOccasionForm> for UpdateOccasion {
    type Error = FormError;

    fn try_from(form: UpdateOccasionForm) -> Result<Self, Self::Error> {
        Ok(Self {
            title: form
                .title
                .map(OccasionTitle::new)
                .transpose()
                .map_err(field_error("title"))?,
            occasion_type: form.occasion_type.map(OccasionType::new),
            date: form.date.as_deref().map(parse_date).transpose()?,
            location: optional_field(form.location, "location", OccasionDetail::new)?,
            dress_code: optional_field(form.dress_code, "dressCode", OccasionDetail::new)?,
            notes: optional_field(form.notes, "notes", OccasionNotes::new)?,
            skin_tone: optional_field(form.skin_tone, "skinTone", OccasionDetail::new)?,
            clothes_list: form
                .clothes_list
                .as_deref()
                .map(parse_clothes_list)
                .transpose()?,
        })
    }
}
