//! Repository implementation for occasions and their clothes lists.

use chrono::Utc;
use diesel::{Connection, prelude::*};

use crate::{
    domain::{
        occasion::{NewOccasion, Occasion, UpdateOccasion},
        types::{OccasionId, UserId},
    },
    models::occasion::{
        NewOccasion as DbNewOccasion, Occasion as DbOccasion, OccasionClothing,
        UpdateOccasion as DbUpdateOccasion, occasion_clothes_rows,
    },
    repository::{
        DieselRepository, OccasionReader, OccasionWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

/// Loads the ordered clothes ids of a single occasion.
fn load_clothes_list(conn: &mut SqliteConnection, occasion_id: i32) -> QueryResult<Vec<i32>> {
    use crate::schema::occasion_clothes;

    occasion_clothes::table
        .filter(occasion_clothes::occasion_id.eq(occasion_id))
        .order(occasion_clothes::position.asc())
        .select(occasion_clothes::clothing_item_id)
        .load::<i32>(conn)
}

impl OccasionReader for DieselRepository {
    fn get_occasion(
        &self,
        id: OccasionId,
        owner_id: UserId,
    ) -> RepositoryResult<Option<Occasion>> {
        use crate::schema::occasions;

        let mut conn = self.conn()?;
        let db_occasion = occasions::table
            .filter(occasions::id.eq(id.get()))
            .filter(occasions::owner_id.eq(owner_id.get()))
            .first::<DbOccasion>(&mut conn)
            .optional()?;

        let Some(db_occasion) = db_occasion else {
            return Ok(None);
        };

        let clothes_list = load_clothes_list(&mut conn, db_occasion.id)?;
        Ok(Some(db_occasion.into_domain(clothes_list)?))
    }

    fn list_occasions(&self, owner_id: UserId) -> RepositoryResult<Vec<Occasion>> {
        use crate::schema::{occasion_clothes, occasions};

        let mut conn = self.conn()?;
        let db_occasions = occasions::table
            .filter(occasions::owner_id.eq(owner_id.get()))
            .order((occasions::date.desc(), occasions::id.desc()))
            .load::<DbOccasion>(&mut conn)?;

        let clothes = OccasionClothing::belonging_to(&db_occasions)
            .order(occasion_clothes::position.asc())
            .select(OccasionClothing::as_select())
            .load::<OccasionClothing>(&mut conn)?
            .grouped_by(&db_occasions);

        db_occasions
            .into_iter()
            .zip(clothes)
            .map(|(occasion, clothes)| {
                let ids = clothes.into_iter().map(|c| c.clothing_item_id).collect();
                occasion.into_domain(ids).map_err(RepositoryError::from)
            })
            .collect()
    }
}

impl OccasionWriter for DieselRepository {
    fn create_occasion(&self, new_occasion: &NewOccasion) -> RepositoryResult<Occasion> {
        use crate::schema::{occasion_clothes, occasions};

        let mut conn = self.conn()?;
        let db_new_occasion: DbNewOccasion = new_occasion.into();

        let db_occasion = conn.transaction::<DbOccasion, diesel::result::Error, _>(|conn| {
            let db_occasion = diesel::insert_into(occasions::table)
                .values(&db_new_occasion)
                .get_result::<DbOccasion>(conn)?;

            let rows = occasion_clothes_rows(db_occasion.id, &new_occasion.clothes_list);
            if !rows.is_empty() {
                diesel::insert_into(occasion_clothes::table)
                    .values(rows)
                    .execute(conn)?;
            }

            Ok(db_occasion)
        })?;

        let clothes_list = new_occasion
            .clothes_list
            .iter()
            .map(|id| id.get())
            .collect();
        Ok(db_occasion.into_domain(clothes_list)?)
    }

    fn update_occasion(
        &self,
        id: OccasionId,
        owner_id: UserId,
        updates: &UpdateOccasion,
    ) -> RepositoryResult<Occasion> {
        use crate::schema::{occasion_clothes, occasions};

        let mut conn = self.conn()?;
        let db_updates = DbUpdateOccasion::new(updates, Utc::now().naive_utc());

        let (db_occasion, clothes_list) = conn
            .transaction::<(DbOccasion, Vec<i32>), diesel::result::Error, _>(|conn| {
                let db_occasion = diesel::update(
                    occasions::table
                        .filter(occasions::id.eq(id.get()))
                        .filter(occasions::owner_id.eq(owner_id.get())),
                )
                .set(&db_updates)
                .get_result::<DbOccasion>(conn)?;

                if let Some(clothes_list) = &updates.clothes_list {
                    diesel::delete(
                        occasion_clothes::table
                            .filter(occasion_clothes::occasion_id.eq(db_occasion.id)),
                    )
                    .execute(conn)?;

                    let rows = occasion_clothes_rows(db_occasion.id, clothes_list);
                    if !rows.is_empty() {
                        diesel::insert_into(occasion_clothes::table)
                            .values(rows)
                            .execute(conn)?;
                    }
                }

                let clothes_list = load_clothes_list(conn, db_occasion.id)?;
                Ok((db_occasion, clothes_list))
            })?;

        Ok(db_occasion.into_domain(clothes_list)?)
    }

    fn delete_occasion(&self, id: OccasionId, owner_id: UserId) -> RepositoryResult<()> {
        use crate::schema::occasions;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(
            occasions::table
                .filter(occasions::id.eq(id.get()))
                .filter(occasions::owner_id.eq(owner_id.get())),
        )
        .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
