//! Request bodies for managing wardrobe items.

use serde::Deserialize;
use validator::Validate;

use crate::domain::clothing_item::{NewClothingItem, UpdateClothingItem};
use crate::domain::types::{
    Category, ClothingName, ClothingOccasion, Color, Gender, ImageUrl, Price, UserId,
};
use crate::forms::{FormError, field_error, optional_field};

#[derive(Debug, Deserialize, Validate)]
/// Body for adding a garment. The image is already hosted; only its URL is stored.
pub struct AddClothingItemForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(length(min = 1))]
    pub color: String,
    /// Free-text occasion tag, e.g. `Wedding Guest`.
    #[validate(length(min = 1))]
    pub occasion: String,
    pub gender: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(url)]
    pub image: String,
}

pub struct AddClothingItemPayload {
    pub name: ClothingName,
    pub category: Category,
    pub color: Color,
    pub occasion: ClothingOccasion,
    pub gender: Option<Gender>,
    pub price: Option<Price>,
    pub image: ImageUrl,
}

impl TryFrom<AddClothingItemForm> for AddClothingItemPayload {
    type Error = FormError;

    fn try_from(form: AddClothingItemForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            name: ClothingName::new(form.name).map_err(field_error("name"))?,
            category: Category::new(form.category).map_err(field_error("category"))?,
            color: Color::new(form.color).map_err(field_error("color"))?,
            occasion: ClothingOccasion::new(form.occasion).map_err(field_error("occasion"))?,
            gender: optional_field(form.gender, "gender", Gender::new)?,
            price: form
                .price
                .map(Price::new)
                .transpose()
                .map_err(field_error("price"))?,
            image: ImageUrl::new(form.image).map_err(field_error("image"))?,
        })
    }
}

impl AddClothingItemPayload {
    pub fn into_domain(self, owner_id: UserId) -> NewClothingItem {
        NewClothingItem::new(
            owner_id,
            self.name,
            self.category,
            self.color,
            self.occasion,
            self.gender,
            self.price,
            self.image,
        )
    }
}

#[derive(Debug, Default, Deserialize)]
/// Partial update; absent keys leave the stored values untouched.
pub struct UpdateClothingItemForm {
    pub name: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub occasion: Option<String>,
    pub gender: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

impl TryFrom<UpdateClothingItemForm> for UpdateClothingItem {
    type Error = FormError;

    fn try_from(form: UpdateClothingItemForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: form
                .name
                .map(ClothingName::new)
                .transpose()
                .map_err(field_error("name"))?,
            category: form
                .category
                .map(Category::new)
                .transpose()
                .map_err(field_error("category"))?,
            color: form
                .color
                .map(Color::new)
                .transpose()
                .map_err(field_error("color"))?,
            occasion: form
                .occasion
                .map(ClothingOccasion::new)
                .transpose()
                .map_err(field_error("occasion"))?,
            gender: optional_field(form.gender, "gender", Gender::new)?,
            price: form
                .price
                .map(Price::new)
                .transpose()
                .map_err(field_error("price"))?,
            image: form
                .image
                .map(ImageUrl::new)
                .transpose()
                .map_err(field_error("image"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> AddClothingItemForm {
        AddClothingItemForm {
            name: "Beach Party Shirt".into(),
            category: "Shirt".into(),
            color: "Blue".into(),
            occasion: "Beach Party".into(),
            gender: Some("Male".into()),
            price: Some(45.0),
            image: "https://img.example.com/shirt.jpg".into(),
        }
    }

    #[test]
    fn valid_form_becomes_payload() {
        let payload = AddClothingItemPayload::try_from(form()).unwrap();
        assert_eq!(payload.occasion.as_str(), "Beach Party");
        assert_eq!(payload.gender.unwrap().as_str(), "male");

        let item = AddClothingItemPayload::try_from(form())
            .unwrap()
            .into_domain(UserId::new(2).unwrap());
        assert_eq!(item.owner_id.get(), 2);
    }

    #[test]
    fn invalid_image_url_fails_validation() {
        let mut form = form();
        form.image = "not-a-url".into();
        assert!(matches!(
            AddClothingItemPayload::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn negative_price_fails_validation() {
        let mut form = form();
        form.price = Some(-5.0);
        assert!(matches!(
            AddClothingItemPayload::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let mut form = form();
        form.name = "   ".into();
        assert!(matches!(
            AddClothingItemPayload::try_from(form),
            Err(FormError::InvalidField { field: "name", .. })
        ));
    }

    #[test]
    fn update_form_keeps_absent_fields_empty() {
        let form = UpdateClothingItemForm {
            occasion: Some("casual".into()),
            ..Default::default()
        };
        let update = UpdateClothingItem::try_from(form).unwrap();
        assert_eq!(update.occasion.unwrap().as_str(), "casual");
        assert!(update.name.is_none());
        assert!(update.image.is_none());
    }
}
