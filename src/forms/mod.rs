//! JSON request bodies accepted by the wardrobe routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::{ClothingItemId, TypeConstraintError};

pub mod clothing_item;
pub mod occasion;
pub mod user;

#[derive(Debug, Error)]
/// Errors that can occur when processing request bodies.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Title and date are required")]
    MissingTitleOrDate,

    #[error("invalid {field}: {source}")]
    InvalidField {
        field: &'static str,
        source: TypeConstraintError,
    },

    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid clothing item id {0}")]
    InvalidClothingItemId(i32),
}

/// Wraps a value-object error with the name of the offending field.
pub(crate) fn field_error(field: &'static str) -> impl Fn(TypeConstraintError) -> FormError {
    move |source| FormError::InvalidField { field, source }
}

/// Validates raw ids, dropping repeats while keeping the first-seen order.
pub(crate) fn parse_clothes_list(raw: &[i32]) -> Result<Vec<ClothingItemId>, FormError> {
    let mut ids: Vec<ClothingItemId> = Vec::with_capacity(raw.len());
    for &value in raw {
        let id = ClothingItemId::new(value).map_err(|_| FormError::InvalidClothingItemId(value))?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Turns blank optional strings into `None` before applying a constructor.
pub(crate) fn optional_field<T>(
    value: Option<String>,
    field: &'static str,
    build: impl FnOnce(String) -> Result<T, TypeConstraintError>,
) -> Result<Option<T>, FormError> {
    match value {
        Some(value) if !value.trim().is_empty() => build(value).map(Some).map_err(field_error(field)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Gender;

    #[test]
    fn clothes_list_is_deduplicated_in_order() {
        let ids = parse_clothes_list(&[4, 2, 4, 9]).unwrap();
        let raw: Vec<i32> = ids.iter().map(|id| id.get()).collect();
        assert_eq!(raw, vec![4, 2, 9]);
    }

    #[test]
    fn clothes_list_rejects_non_positive_ids() {
        assert!(matches!(
            parse_clothes_list(&[1, 0]),
            Err(FormError::InvalidClothingItemId(0))
        ));
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let gender = optional_field(Some("  ".into()), "gender", Gender::new).unwrap();
        assert!(gender.is_none());
        let gender = optional_field(Some("Female".into()), "gender", Gender::new).unwrap();
        assert_eq!(gender.unwrap().as_str(), "female");
    }
}
