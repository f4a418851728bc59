//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::clothing_item::{ClothingItem, NewClothingItem, UpdateClothingItem};
use crate::domain::occasion::{NewOccasion, Occasion, UpdateOccasion};
use crate::domain::suggestion::TargetTag;
use crate::domain::types::{ClothingItemId, OccasionId, UserEmail, UserId};
use crate::domain::user::{NewUser, UpdateUser, UpdateUserProfile, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ClothingItemReader, ClothingItemWriter, FavoriteReader, FavoriteWriter, OccasionReader,
    OccasionWriter, UserReader, UserWriter,
};

mock! {
    pub Repository {}

    impl UserReader for Repository {
        fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;
        fn get_user_by_email(&self, email: &UserEmail) -> RepositoryResult<Option<User>>;
        fn list_users(&self) -> RepositoryResult<Vec<User>>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn update_user_profile(
            &self,
            id: UserId,
            updates: &UpdateUserProfile,
        ) -> RepositoryResult<User>;
        fn set_user_approved(&self, id: UserId, approved: bool) -> RepositoryResult<User>;
        fn update_user(&self, id: UserId, updates: &UpdateUser) -> RepositoryResult<User>;
        fn delete_user(&self, id: UserId) -> RepositoryResult<()>;
    }

    impl FavoriteReader for Repository {
        fn list_favorite_items(&self, user_id: UserId) -> RepositoryResult<Vec<ClothingItem>>;
    }

    impl FavoriteWriter for Repository {
        fn toggle_favorite(
            &self,
            user_id: UserId,
            item_id: ClothingItemId,
        ) -> RepositoryResult<bool>;
    }

    impl ClothingItemReader for Repository {
        fn get_clothing_item(
            &self,
            id: ClothingItemId,
            owner_id: UserId,
        ) -> RepositoryResult<Option<ClothingItem>>;
        fn list_clothing_items(&self, owner_id: UserId) -> RepositoryResult<Vec<ClothingItem>>;
        fn list_clothing_items_by_ids(
            &self,
            owner_id: UserId,
            ids: &[ClothingItemId],
        ) -> RepositoryResult<Vec<ClothingItem>>;
        fn find_clothing_items_by_tag(
            &self,
            owner_id: UserId,
            tag: &TargetTag,
        ) -> RepositoryResult<Vec<ClothingItem>>;
        fn count_clothing_items_with_exact_tag(
            &self,
            owner_id: UserId,
            tag: &TargetTag,
        ) -> RepositoryResult<usize>;
        fn list_distinct_clothing_tags(&self, owner_id: UserId) -> RepositoryResult<Vec<String>>;
    }

    impl ClothingItemWriter for Repository {
        fn create_clothing_item(&self, new_item: &NewClothingItem) -> RepositoryResult<ClothingItem>;
        fn update_clothing_item(
            &self,
            id: ClothingItemId,
            owner_id: UserId,
            updates: &UpdateClothingItem,
        ) -> RepositoryResult<ClothingItem>;
        fn delete_clothing_item(&self, id: ClothingItemId, owner_id: UserId) -> RepositoryResult<()>;
    }

    impl OccasionReader for Repository {
        fn get_occasion(
            &self,
            id: OccasionId,
            owner_id: UserId,
        ) -> RepositoryResult<Option<Occasion>>;
        fn list_occasions(&self, owner_id: UserId) -> RepositoryResult<Vec<Occasion>>;
    }

    impl OccasionWriter for Repository {
        fn create_occasion(&self, new_occasion: &NewOccasion) -> RepositoryResult<Occasion>;
        fn update_occasion(
            &self,
            id: OccasionId,
            owner_id: UserId,
            updates: &UpdateOccasion,
        ) -> RepositoryResult<Occasion>;
        fn delete_occasion(&self, id: OccasionId, owner_id: UserId) -> RepositoryResult<()>;
    }
}
