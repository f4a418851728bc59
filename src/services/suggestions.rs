//! Outfit suggestions for an occasion, drawn from the requester's wardrobe.

use crate::domain::suggestion::{Suggestion, TargetTag};
use crate::domain::types::{Gender, OccasionId, UserId};
use crate::dto::suggestion::{OccasionSummary, SuggestionsResponse};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{ClothingItemReader, OccasionReader, UserReader};
use crate::services::{ServiceError, ServiceResult, owner_id};

/// Reported when the requester never recorded a gender.
pub const GENDER_NOT_SET: &str = "not set";

/// Computes suggestions for one of the requester's occasions.
///
/// The occasion is loaded first because the wardrobe filter depends on its
/// type. A missing or foreign occasion is [`ServiceError::NotFound`]; an
/// occasion with no matching items yields an empty list.
pub fn suggest_for_occasion<R>(
    repo: &R,
    user: &AuthenticatedUser,
    occasion_id: i32,
) -> ServiceResult<SuggestionsResponse>
where
    R: OccasionReader + ClothingItemReader + UserReader + ?Sized,
{
    let owner_id = owner_id(user)?;
    let occasion_id = OccasionId::new(occasion_id).map_err(|_| ServiceError::NotFound)?;

    let occasion = repo
        .get_occasion(occasion_id, owner_id)?
        .ok_or(ServiceError::NotFound)?;

    let tag = TargetTag::from(&occasion.occasion_type);
    log::debug!(
        "Matching wardrobe of user {owner_id} for occasion {occasion_id} ({}) with tag `{tag}`",
        occasion.occasion_type
    );

    let items = repo.find_clothing_items_by_tag(owner_id, &tag)?;
    log::debug!("Found {} wardrobe matches for tag `{tag}`", items.len());

    if items.is_empty() {
        log_empty_match_diagnostics(repo, owner_id, &tag)?;
    }

    let user_gender = repo
        .get_user_by_id(owner_id)?
        .and_then(|user| user.gender)
        .map(Gender::into_inner)
        .unwrap_or_else(|| GENDER_NOT_SET.to_string());

    let suggestions = items
        .into_iter()
        .map(|item| Suggestion::from_wardrobe(item, &occasion.occasion_type))
        .collect();

    Ok(SuggestionsResponse {
        suggestions,
        occasion: OccasionSummary::from(&occasion),
        user_gender,
    })
}

/// Logs what the wardrobe does contain so empty results can be explained.
fn log_empty_match_diagnostics<R>(repo: &R, owner_id: UserId, tag: &TargetTag) -> ServiceResult<()>
where
    R: ClothingItemReader + ?Sized,
{
    let exact = repo.count_clothing_items_with_exact_tag(owner_id, tag)?;
    let available = repo.list_distinct_clothing_tags(owner_id)?;
    log::debug!(
        "No wardrobe items for tag `{tag}` (exact matches: {exact}); available tags: {available:?}"
    );
    Ok(())
}
