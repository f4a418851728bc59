//! Repository implementation for user accounts.

use diesel::prelude::*;

use crate::{
    domain::{
        types::{UserEmail, UserId},
        user::{NewUser, UpdateUser, UpdateUserProfile, User},
    },
    models::user::{
        NewUser as DbNewUser, UpdateUser as DbUpdateUser,
        UpdateUserProfile as DbUpdateUserProfile, User as DbUser,
    },
    repository::{DieselRepository, UserReader, UserWriter, errors::RepositoryResult},
};

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let db_user = users::table
            .find(id.get())
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(db_user.map(User::try_from).transpose()?)
    }

    fn get_user_by_email(&self, email: &UserEmail) -> RepositoryResult<Option<User>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let db_user = users::table
            .filter(users::email.eq(email.as_str()))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(db_user.map(User::try_from).transpose()?)
    }

    fn list_users(&self) -> RepositoryResult<Vec<User>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let users = users::table
            .order((users::created_at.desc(), users::id.desc()))
            .load::<DbUser>(&mut conn)?
            .into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(users)
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let db_new_user: DbNewUser = new_user.into();

        let db_user = diesel::insert_into(users::table)
            .values(&db_new_user)
            .get_result::<DbUser>(&mut conn)?;

        Ok(User::try_from(db_user)?)
    }

    fn update_user_profile(
        &self,
        id: UserId,
        updates: &UpdateUserProfile,
    ) -> RepositoryResult<User> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        if updates.name.is_none() && updates.gender.is_none() {
            let db_user = users::table.find(id.get()).first::<DbUser>(&mut conn)?;
            return Ok(User::try_from(db_user)?);
        }

        let db_updates: DbUpdateUserProfile = updates.into();
        let db_user = diesel::update(users::table.find(id.get()))
            .set(&db_updates)
            .get_result::<DbUser>(&mut conn)?;

        Ok(User::try_from(db_user)?)
    }

    fn set_user_approved(&self, id: UserId, approved: bool) -> RepositoryResult<User> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let db_user = diesel::update(users::table.find(id.get()))
            .set(users::is_approved.eq(approved))
            .get_result::<DbUser>(&mut conn)?;

        Ok(User::try_from(db_user)?)
    }

    fn update_user(&self, id: UserId, updates: &UpdateUser) -> RepositoryResult<User> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        if updates.is_empty() {
            let db_user = users::table.find(id.get()).first::<DbUser>(&mut conn)?;
            return Ok(User::try_from(db_user)?);
        }

        let db_updates: DbUpdateUser = updates.into();
        let db_user = diesel::update(users::table.find(id.get()))
            .set(&db_updates)
            .get_result::<DbUser>(&mut conn)?;

        Ok(User::try_from(db_user)?)
    }

    fn delete_user(&self, id: UserId) -> RepositoryResult<()> {
        use crate::schema::{user_favorites, users};

        let mut conn = self.conn()?;
        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            diesel::delete(user_favorites::table.filter(user_favorites::user_id.eq(id.get())))
                .execute(conn)?;

            let deleted = diesel::delete(users::table.find(id.get())).execute(conn)?;
            if deleted == 0 {
                return Err(diesel::result::Error::NotFound);
            }
            Ok(())
        })?;

        Ok(())
    }
}
