use std::fmt;

use chrono::NaiveDateTime;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use log::error;
use serde::{Deserialize, Serialize};

use crate::errors::{CustomResult, Error};
use crate::macros::database_error_handler::db_handle_get_error;
use crate::models::NewUser;
use crate::modules::helpers::password::verify_password;
use crate::schema::users;

#[derive(Queryable, Serialize, Identifiable, PartialEq, Debug, Clone, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password: String,
    pub registered_on: NaiveDateTime,
    pub admin: bool,
}

impl User {
    /// # create user
    /// create a new user. the plaintext password is hashed with bcrypt
    /// before it is stored; the hash embeds its own salt. registration
    /// time is stamped at construction.
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `email` - the login email, unique across users
    /// * `plaintext` - the password as entered
    /// * `admin` - whether the user is an administrator
    /// * `cost` - the bcrypt work factor, supplied by the hosting application
    ///
    /// ## Returns
    /// * `User` - the stored user, password field already hashed
    pub fn new(
        conn: &mut PgConnection,
        email: &str,
        plaintext: &str,
        admin: bool,
        cost: u32,
    ) -> CustomResult<User> {
        let new_user = NewUser::from_plaintext(email, plaintext, admin, cost)?;

        match diesel::insert_into(users::table)
            .values(&new_user)
            .get_result::<User>(conn)
        {
            Ok(user) => Ok(user),
            Err(e) => {
                error!(target:"models/user:new", "Error creating user: {}", e);
                Err(Error::Database(e))
            }
        }
    }

    /// # verify password
    /// check a candidate password against the stored hash.
    /// returns false for a non-matching candidate or an unreadable hash.
    pub fn verify_password(&self, candidate: &str) -> bool {
        verify_password(candidate, &self.password).unwrap_or(false)
    }

    pub fn exists(conn: &mut PgConnection, email_in: &str) -> bool {
        use crate::schema::users::dsl::*;
        use diesel::dsl::exists;
        use diesel::select;

        select(exists(users.filter(email.eq(email_in))))
            .get_result(conn)
            .unwrap()
    }

    pub fn get_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<User> {
        use crate::schema::users::dsl::*;

        let user = db_handle_get_error!(
            users.filter(id.eq(id_in)).first::<User>(conn),
            "models/user:get_by_id",
            "user"
        );

        Ok(user)
    }

    pub fn get_by_email(conn: &mut PgConnection, email_in: &str) -> QueryResult<User> {
        use crate::schema::users::dsl::*;

        let user = db_handle_get_error!(
            users.filter(email.eq(email_in)).first::<User>(conn),
            "models/user:get_by_email",
            "user"
        );

        Ok(user)
    }

    pub fn get_all(conn: &mut PgConnection) -> QueryResult<Vec<User>> {
        use crate::schema::users::dsl::*;

        users.load::<User>(conn)
    }

    /// # set admin flag
    /// promote or demote the user, returning the updated row.
    pub fn set_admin(&self, conn: &mut PgConnection, admin_in: bool) -> QueryResult<User> {
        use crate::schema::users::dsl::*;

        diesel::update(users.filter(id.eq(self.id)))
            .set(admin.eq(admin_in))
            .get_result(conn)
    }

    pub fn delete(&self, conn: &mut PgConnection) -> QueryResult<usize> {
        User::delete_by_id(conn, self.id)
    }

    pub fn delete_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<usize> {
        diesel::delete(users::table.filter(users::id.eq(id_in))).execute(conn)
    }

    pub fn to_new(&self) -> NewUser {
        NewUser {
            email: self.email.clone(),
            password: self.password.clone(),
            registered_on: self.registered_on,
            admin: self.admin,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<User {}>", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::helpers::password::hash_password;

    fn sample_user() -> User {
        User {
            id: 1,
            email: "driver@example.com".to_string(),
            password: hash_password("hunter2", 4).unwrap(),
            registered_on: chrono::Local::now().naive_local(),
            admin: false,
        }
    }

    #[test]
    fn display_shows_the_email() {
        assert_eq!(sample_user().to_string(), "<User driver@example.com>");
    }

    #[test]
    fn verify_password_matches_only_the_original() {
        let user = sample_user();
        assert!(user.verify_password("hunter2"));
        assert!(!user.verify_password("hunter21"));
    }

    #[test]
    fn to_new_keeps_the_stored_hash() {
        let user = sample_user();
        let new_user = user.to_new();
        assert_eq!(new_user.password, user.password);
        assert_eq!(new_user.email, user.email);
    }
}
