//! Diesel models representing occasions and their picked clothes.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::occasion::{
    NewOccasion as DomainNewOccasion, Occasion as DomainOccasion,
    UpdateOccasion as DomainUpdateOccasion,
};
use crate::domain::types::{
    ClothingItemId, OccasionDetail, OccasionId, OccasionNotes, OccasionTitle, OccasionType,
    TypeConstraintError, UserId,
};
use crate::models::clothing_item::ClothingItem;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::occasions)]
/// Diesel model for [`crate::domain::occasion::Occasion`] without its clothes list.
pub struct Occasion {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub occasion_type: String,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub dress_code: Option<String>,
    pub notes: Option<String>,
    pub skin_tone: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::occasions)]
/// Insertable form of [`Occasion`].
pub struct NewOccasion<'a> {
    pub owner_id: i32,
    pub title: &'a str,
    pub occasion_type: &'a str,
    pub date: NaiveDate,
    pub location: Option<&'a str>,
    pub dress_code: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub skin_tone: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::occasions)]
/// Data used when updating an [`Occasion`] record.
pub struct UpdateOccasion<'a> {
    pub title: Option<&'a str>,
    pub occasion_type: Option<&'a str>,
    pub date: Option<NaiveDate>,
    pub location: Option<&'a str>,
    pub dress_code: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub skin_tone: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Queryable, Selectable, Associations, Identifiable)]
#[diesel(primary_key(occasion_id, clothing_item_id))]
#[diesel(belongs_to(Occasion, foreign_key = occasion_id))]
#[diesel(belongs_to(ClothingItem, foreign_key = clothing_item_id))]
#[diesel(table_name = crate::schema::occasion_clothes)]
/// Association table linking occasions to the wardrobe items picked for them.
pub struct OccasionClothing {
    pub occasion_id: i32,
    pub clothing_item_id: i32,
    pub position: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::occasion_clothes)]
/// Insertable variant of [`OccasionClothing`].
pub struct NewOccasionClothing {
    pub occasion_id: i32,
    pub clothing_item_id: i32,
    pub position: i32,
}

impl Occasion {
    /// Converts the row into the domain entity together with its ordered clothes ids.
    pub fn into_domain(self, clothes_list: Vec<i32>) -> Result<DomainOccasion, TypeConstraintError> {
        Ok(DomainOccasion {
            id: OccasionId::try_from(self.id)?,
            owner_id: UserId::try_from(self.owner_id)?,
            title: OccasionTitle::new(self.title)?,
            occasion_type: OccasionType::new(self.occasion_type),
            date: self.date,
            location: self.location.map(OccasionDetail::new).transpose()?,
            dress_code: self.dress_code.map(OccasionDetail::new).transpose()?,
            notes: self.notes.map(OccasionNotes::new).transpose()?,
            skin_tone: self.skin_tone.map(OccasionDetail::new).transpose()?,
            clothes_list: clothes_list
                .into_iter()
                .map(ClothingItemId::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewOccasion> for NewOccasion<'a> {
    fn from(occasion: &'a DomainNewOccasion) -> Self {
        Self {
            owner_id: occasion.owner_id.get(),
            title: occasion.title.as_str(),
            occasion_type: occasion.occasion_type.as_str(),
            date: occasion.date,
            location: occasion.location.as_ref().map(|v| v.as_str()),
            dress_code: occasion.dress_code.as_ref().map(|v| v.as_str()),
            notes: occasion.notes.as_ref().map(OccasionNotes::as_str),
            skin_tone: occasion.skin_tone.as_ref().map(|v| v.as_str()),
        }
    }
}

impl<'a> UpdateOccasion<'a> {
    /// Builds the changeset, stamping it with `updated_at`.
    pub fn new(occasion: &'a DomainUpdateOccasion, updated_at: NaiveDateTime) -> Self {
        Self {
            title: occasion.title.as_ref().map(|v| v.as_str()),
            occasion_type: occasion.occasion_type.as_ref().map(OccasionType::as_str),
            date: occasion.date,
            location: occasion.location.as_ref().map(|v| v.as_str()),
            dress_code: occasion.dress_code.as_ref().map(|v| v.as_str()),
            notes: occasion.notes.as_ref().map(OccasionNotes::as_str),
            skin_tone: occasion.skin_tone.as_ref().map(|v| v.as_str()),
            updated_at,
        }
    }
}

/// Builds the join rows for an occasion, preserving the order of `clothes_list`.
pub fn occasion_clothes_rows(
    occasion_id: i32,
    clothes_list: &[ClothingItemId],
) -> Vec<NewOccasionClothing> {
    clothes_list
        .iter()
        .enumerate()
        .map(|(position, clothing_item_id)| NewOccasionClothing {
            occasion_id,
            clothing_item_id: clothing_item_id.get(),
            position: position as i32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn db_occasion(occasion_type: &str) -> Occasion {
        let now = Utc::now().naive_utc();
        Occasion {
            id: 4,
            owner_id: 2,
            title: "Anna's wedding".into(),
            occasion_type: occasion_type.into(),
            date: NaiveDate::from_ymd_opt(2026, 6, 20).unwrap(),
            location: Some("Lisbon".into()),
            dress_code: None,
            notes: None,
            skin_tone: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn occasion_into_domain_keeps_clothes_order() {
        let domain = db_occasion("wedding")
            .into_domain(vec![9, 3])
            .expect("valid occasion");
        assert_eq!(domain.id.get(), 4);
        assert_eq!(domain.occasion_type.as_str(), "wedding");
        let ids: Vec<i32> = domain.clothes_list.iter().map(|id| id.get()).collect();
        assert_eq!(ids, vec![9, 3]);
    }

    #[test]
    fn blank_stored_type_reads_as_other() {
        let domain = db_occasion("").into_domain(vec![]).expect("valid occasion");
        assert_eq!(domain.occasion_type.as_str(), "other");
    }

    #[test]
    fn join_rows_record_positions() {
        let ids = [ClothingItemId::new(8).unwrap(), ClothingItemId::new(2).unwrap()];
        let rows = occasion_clothes_rows(5, &ids);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].clothing_item_id, rows[0].position), (8, 0));
        assert_eq!((rows[1].clothing_item_id, rows[1].position), (2, 1));
        assert!(rows.iter().all(|row| row.occasion_id == 5));
    }
}
