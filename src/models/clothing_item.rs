//! Diesel models representing wardrobe items.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::clothing_item::{
    ClothingItem as DomainClothingItem, NewClothingItem as DomainNewClothingItem,
    UpdateClothingItem as DomainUpdateClothingItem,
};
use crate::domain::types::{
    Category, ClothingItemId, ClothingName, ClothingOccasion, Color, Gender, ImageUrl, Price,
    TypeConstraintError, UserId,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clothing_items)]
/// Diesel model for [`crate::domain::clothing_item::ClothingItem`].
pub struct ClothingItem {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub category: String,
    pub color: String,
    pub occasion: String,
    pub gender: Option<String>,
    pub price: Option<f64>,
    pub image: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clothing_items)]
/// Insertable form of [`ClothingItem`].
pub struct NewClothingItem<'a> {
    pub owner_id: i32,
    pub name: &'a str,
    pub category: &'a str,
    pub color: &'a str,
    pub occasion: &'a str,
    pub gender: Option<&'a str>,
    pub price: Option<f64>,
    pub image: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clothing_items)]
/// Data used when updating a [`ClothingItem`] record.
pub struct UpdateClothingItem<'a> {
    pub name: Option<&'a str>,
    pub category: Option<&'a str>,
    pub color: Option<&'a str>,
    pub occasion: Option<&'a str>,
    pub gender: Option<&'a str>,
    pub price: Option<f64>,
    pub image: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<ClothingItem> for DomainClothingItem {
    type Error = TypeConstraintError;

    fn try_from(item: ClothingItem) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ClothingItemId::try_from(item.id)?,
            owner_id: UserId::try_from(item.owner_id)?,
            name: ClothingName::new(item.name)?,
            category: Category::new(item.category)?,
            color: Color::new(item.color)?,
            occasion: ClothingOccasion::new(item.occasion)?,
            gender: item.gender.map(Gender::new).transpose()?,
            price: item.price.map(Price::new).transpose()?,
            image: ImageUrl::new(item.image)?,
            created_at: item.created_at,
            updated_at: item.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewClothingItem> for NewClothingItem<'a> {
    fn from(item: &'a DomainNewClothingItem) -> Self {
        Self {
            owner_id: item.owner_id.get(),
            name: item.name.as_str(),
            category: item.category.as_str(),
            color: item.color.as_str(),
            occasion: item.occasion.as_str(),
            gender: item.gender.as_ref().map(Gender::as_str),
            price: item.price.map(Price::get),
            image: item.image.as_str(),
            created_at: item.created_at,
            updated_at: item.created_at,
        }
    }
}

impl<'a> UpdateClothingItem<'a> {
    /// Builds the changeset, stamping it with `updated_at`.
    pub fn new(item: &'a DomainUpdateClothingItem, updated_at: NaiveDateTime) -> Self {
        Self {
            name: item.name.as_ref().map(|v| v.as_str()),
            category: item.category.as_ref().map(|v| v.as_str()),
            color: item.color.as_ref().map(|v| v.as_str()),
            occasion: item.occasion.as_ref().map(|v| v.as_str()),
            gender: item.gender.as_ref().map(Gender::as_str),
            price: item.price.map(Price::get),
            image: item.image.as_ref().map(ImageUrl::as_str),
            updated_at,
        }
    }
}
