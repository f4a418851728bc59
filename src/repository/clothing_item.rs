//! Repository implementation for wardrobe items.

use chrono::Utc;
use diesel::prelude::*;

use crate::{
    db::unicode_lower,
    domain::{
        clothing_item::{ClothingItem, NewClothingItem, UpdateClothingItem},
        suggestion::TargetTag,
        types::{ClothingItemId, UserId},
    },
    models::clothing_item::{
        ClothingItem as DbClothingItem, NewClothingItem as DbNewClothingItem,
        UpdateClothingItem as DbUpdateClothingItem,
    },
    repository::{
        ClothingItemReader, ClothingItemWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn into_domain(items: Vec<DbClothingItem>) -> RepositoryResult<Vec<ClothingItem>> {
    items
        .into_iter()
        .map(|item| ClothingItem::try_from(item).map_err(RepositoryError::from))
        .collect()
}

impl ClothingItemReader for DieselRepository {
    fn get_clothing_item(
        &self,
        id: ClothingItemId,
        owner_id: UserId,
    ) -> RepositoryResult<Option<ClothingItem>> {
        use crate::schema::clothing_items;

        let mut conn = self.conn()?;
        let db_item = clothing_items::table
            .filter(clothing_items::id.eq(id.get()))
            .filter(clothing_items::owner_id.eq(owner_id.get()))
            .first::<DbClothingItem>(&mut conn)
            .optional()?;

        Ok(db_item.map(ClothingItem::try_from).transpose()?)
    }

    fn list_clothing_items(&self, owner_id: UserId) -> RepositoryResult<Vec<ClothingItem>> {
        use crate::schema::clothing_items;

        let mut conn = self.conn()?;
        let items = clothing_items::table
            .filter(clothing_items::owner_id.eq(owner_id.get()))
            .order((clothing_items::created_at.desc(), clothing_items::id.desc()))
            .load::<DbClothingItem>(&mut conn)?;

        into_domain(items)
    }

    fn list_clothing_items_by_ids(
        &self,
        owner_id: UserId,
        ids: &[ClothingItemId],
    ) -> RepositoryResult<Vec<ClothingItem>> {
        use crate::schema::clothing_items;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;
        let raw_ids = ids.iter().map(|id| id.get()).collect::<Vec<i32>>();
        let items = clothing_items::table
            .filter(clothing_items::owner_id.eq(owner_id.get()))
            .filter(clothing_items::id.eq_any(raw_ids))
            .load::<DbClothingItem>(&mut conn)?;

        into_domain(items)
    }

    fn find_clothing_items_by_tag(
        &self,
        owner_id: UserId,
        tag: &TargetTag,
    ) -> RepositoryResult<Vec<ClothingItem>> {
        use crate::schema::clothing_items;

        let mut conn = self.conn()?;
        // The tag is lower-cased in Rust with the same rules as `unicode_lower`.
        let items = clothing_items::table
            .filter(clothing_items::owner_id.eq(owner_id.get()))
            .filter(
                unicode_lower(clothing_items::occasion)
                    .like(tag.contains_pattern())
                    .escape('\\'),
            )
            .order((clothing_items::created_at.desc(), clothing_items::id.desc()))
            .load::<DbClothingItem>(&mut conn)?;

        into_domain(items)
    }

    fn count_clothing_items_with_exact_tag(
        &self,
        owner_id: UserId,
        tag: &TargetTag,
    ) -> RepositoryResult<usize> {
        use crate::schema::clothing_items;

        let mut conn = self.conn()?;
        let count: i64 = clothing_items::table
            .filter(clothing_items::owner_id.eq(owner_id.get()))
            .filter(unicode_lower(clothing_items::occasion).eq(tag.as_str()))
            .count()
            .get_result(&mut conn)?;

        Ok(count as usize)
    }

    fn list_distinct_clothing_tags(&self, owner_id: UserId) -> RepositoryResult<Vec<String>> {
        use crate::schema::clothing_items;

        let mut conn = self.conn()?;
        let tags = clothing_items::table
            .filter(clothing_items::owner_id.eq(owner_id.get()))
            .select(clothing_items::occasion)
            .distinct()
            .order(clothing_items::occasion.asc())
            .load::<String>(&mut conn)?;

        Ok(tags)
    }
}

impl ClothingItemWriter for DieselRepository {
    fn create_clothing_item(&self, new_item: &NewClothingItem) -> RepositoryResult<ClothingItem> {
        use crate::schema::clothing_items;

        let mut conn = self.conn()?;
        let db_new_item: DbNewClothingItem = new_item.into();

        let db_item = diesel::insert_into(clothing_items::table)
            .values(&db_new_item)
            .get_result::<DbClothingItem>(&mut conn)?;

        Ok(ClothingItem::try_from(db_item)?)
    }

    fn update_clothing_item(
        &self,
        id: ClothingItemId,
        owner_id: UserId,
        updates: &UpdateClothingItem,
    ) -> RepositoryResult<ClothingItem> {
        use crate::schema::clothing_items;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateClothingItem::new(updates, Utc::now().naive_utc());

        let db_item = diesel::update(
            clothing_items::table
                .filter(clothing_items::id.eq(id.get()))
                .filter(clothing_items::owner_id.eq(owner_id.get())),
        )
        .set(&db_updates)
        .get_result::<DbClothingItem>(&mut conn)?;

        Ok(ClothingItem::try_from(db_item)?)
    }

    fn delete_clothing_item(&self, id: ClothingItemId, owner_id: UserId) -> RepositoryResult<()> {
        use crate::schema::clothing_items;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(
            clothing_items::table
                .filter(clothing_items::id.eq(id.get()))
                .filter(clothing_items::owner_id.eq(owner_id.get())),
        )
        .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
