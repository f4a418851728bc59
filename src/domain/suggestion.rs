//! Outfit suggestions derived from a user's own wardrobe.
//!
//! An occasion's free-text type is normalized into a [`TargetTag`]; wardrobe
//! items whose own occasion tag contains the target tag (case-insensitively)
//! become [`Suggestion`]s.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::clothing_item::ClothingItem;
use crate::domain::types::{
    Category, ClothingItemId, ClothingName, Color, Gender, ImageUrl, OccasionType, Price,
};

/// Occasion types that never appear as wardrobe tags, mapped to the tag used instead.
pub const FALLBACK_TAGS: &[(&str, &str)] = &[("other", "casual")];

/// Normalized, lower-cased tag used to filter wardrobe items.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TargetTag(String);

impl TargetTag {
    /// Derives the tag for an occasion type: trimmed, lower-cased, blank as
    /// `other`, then passed through [`FALLBACK_TAGS`].
    pub fn for_occasion_type(occasion_type: &str) -> Self {
        let mut tag = occasion_type.trim().to_lowercase();
        if tag.is_empty() {
            tag = OccasionType::DEFAULT.to_string();
        }

        if let Some((_, fallback)) = FALLBACK_TAGS.iter().find(|(from, _)| *from == tag) {
            tag = (*fallback).to_string();
        }

        Self(tag)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// SQL `LIKE` pattern matching any value containing the tag. `%`, `_` and
    /// `\` are escaped with `\`.
    pub fn contains_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for ch in self.0.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }
}

impl Display for TargetTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&OccasionType> for TargetTag {
    fn from(value: &OccasionType) -> Self {
        Self::for_occasion_type(value.as_str())
    }
}

/// Where a suggested garment comes from.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionSource {
    OwnWardrobe,
}

/// A wardrobe item proposed for an occasion.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: ClothingItemId,
    pub name: ClothingName,
    pub category: Category,
    pub color: Color,
    pub image: ImageUrl,
    pub gender: Option<Gender>,
    pub price: Option<Price>,
    pub source: SuggestionSource,
    pub match_reason: String,
}

impl Suggestion {
    /// Wraps one of the requester's own items, citing the occasion type as entered.
    pub fn from_wardrobe(item: ClothingItem, occasion_type: &OccasionType) -> Self {
        Self {
            id: item.id,
            name: item.name,
            category: item.category,
            color: item.color,
            image: item.image,
            gender: item.gender,
            price: item.price,
            source: SuggestionSource::OwnWardrobe,
            match_reason: format!("From your wardrobe for {occasion_type}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::types::{ClothingOccasion, UserId};

    #[test]
    fn other_falls_back_to_casual() {
        assert_eq!(TargetTag::for_occasion_type("other").as_str(), "casual");
        assert_eq!(TargetTag::for_occasion_type(" Other ").as_str(), "casual");
    }

    #[test]
    fn blank_type_is_treated_as_other() {
        assert_eq!(TargetTag::for_occasion_type("   ").as_str(), "casual");
        assert_eq!(TargetTag::for_occasion_type("").as_str(), "casual");
    }

    #[test]
    fn type_is_trimmed_and_lowercased() {
        assert_eq!(TargetTag::for_occasion_type("Wedding ").as_str(), "wedding");
    }

    #[test]
    fn unmapped_types_pass_through() {
        assert_eq!(TargetTag::for_occasion_type("Casual").as_str(), "casual");
        assert_eq!(TargetTag::for_occasion_type("beach").as_str(), "beach");
    }

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(TargetTag::for_occasion_type("beach").contains_pattern(), "%beach%");
        assert_eq!(
            TargetTag::for_occasion_type("100%_fun\\").contains_pattern(),
            "%100\\%\\_fun\\\\%"
        );
    }

    #[test]
    fn suggestion_cites_original_occasion_type() {
        let now = Utc::now().naive_utc();
        let item = ClothingItem {
            id: ClothingItemId::new(5).unwrap(),
            owner_id: UserId::new(1).unwrap(),
            name: ClothingName::new("Linen Shirt").unwrap(),
            category: Category::new("Shirt").unwrap(),
            color: Color::new("White").unwrap(),
            occasion: ClothingOccasion::new("Beach Party").unwrap(),
            gender: None,
            price: Some(Price::new(45.0).unwrap()),
            image: ImageUrl::new("https://img.example.com/shirt.jpg").unwrap(),
            created_at: now,
            updated_at: now,
        };

        let suggestion = Suggestion::from_wardrobe(item, &OccasionType::new("Beach"));

        assert_eq!(suggestion.id.get(), 5);
        assert_eq!(suggestion.source, SuggestionSource::OwnWardrobe);
        assert_eq!(suggestion.match_reason, "From your wardrobe for Beach");

        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["source"], "own-wardrobe");
        assert_eq!(json["matchReason"], "From your wardrobe for Beach");
    }
}
