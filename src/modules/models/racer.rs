use std::fmt;

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::dsl::exists;
use diesel::select;
use log::error;
use serde::{Deserialize, Serialize};

use crate::macros::database_error_handler::db_handle_get_error;
use crate::models::NewRacer;
use crate::modules::models::car::Car;
use crate::modules::models::sponsor::Sponsor;
use crate::modules::models::user::User;
use crate::schema::{cars, racers};

#[derive(Queryable, Serialize, Identifiable, PartialEq, Debug, Clone, Deserialize)]
pub struct Racer {
    pub id: i32,
    pub email: String,
    pub user_id: Option<i32>,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub points: Option<i32>,
    pub sponsor_id: Option<i32>,
}

impl Racer {
    /// # create racer
    /// create a new racer. required fields come first, everything optional
    /// after them. the car relationship lives on the cars table, so a racer
    /// starts without one and gets a car attached later.
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `email_in` - contact email, unique across racers
    /// * `name_in` - the racer's display name
    /// * `city_in` / `state_in` - home town, when known
    /// * `points_in` - championship points, when already earned
    /// * `user_id_in` - the login account of this racer, when they have one
    /// * `sponsor_id_in` - the racer's sponsor, when they have one
    ///
    /// ## Returns
    /// * `Racer` - the stored racer
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        conn: &mut PgConnection,
        email_in: &str,
        name_in: &str,
        city_in: Option<&str>,
        state_in: Option<&str>,
        points_in: Option<i32>,
        user_id_in: Option<i32>,
        sponsor_id_in: Option<i32>,
    ) -> QueryResult<Racer> {
        let new_racer = NewRacer {
            email: email_in.to_string(),
            user_id: user_id_in,
            name: name_in.to_string(),
            city: city_in.map(|c| c.to_string()),
            state: state_in.map(|s| s.to_string()),
            points: points_in,
            sponsor_id: sponsor_id_in,
        };

        match diesel::insert_into(racers::table)
            .values(&new_racer)
            .get_result(conn)
        {
            Ok(racer) => Ok(racer),
            Err(e) => {
                error!(target:"models/racer:new", "Error creating racer: {}", e);
                Err(e)
            }
        }
    }

    pub fn exists(conn: &mut PgConnection, email_in: &str) -> bool {
        use crate::schema::racers::dsl::*;
        select(exists(racers.filter(email.eq(email_in))))
            .get_result(conn)
            .unwrap()
    }

    pub fn get_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<Racer> {
        use crate::schema::racers::dsl::*;

        let racer = db_handle_get_error!(
            racers.filter(id.eq(id_in)).first::<Racer>(conn),
            "models/racer:get_by_id",
            "racer"
        );

        Ok(racer)
    }

    pub fn get_by_email(conn: &mut PgConnection, email_in: &str) -> QueryResult<Racer> {
        use crate::schema::racers::dsl::*;

        let racer = db_handle_get_error!(
            racers.filter(email.eq(email_in)).first::<Racer>(conn),
            "models/racer:get_by_email",
            "racer"
        );

        Ok(racer)
    }

    pub fn get_all(conn: &mut PgConnection) -> QueryResult<Vec<Racer>> {
        use crate::schema::racers::dsl::*;
        racers.load::<Racer>(conn)
    }

    /// # get the racer's car
    /// the car points at the racer, so this is a lookup on the cars table.
    /// `None` when no car has been attached yet.
    pub fn get_car(&self, conn: &mut PgConnection) -> QueryResult<Option<Car>> {
        cars::table
            .filter(cars::racer_id.eq(self.id))
            .first::<Car>(conn)
            .optional()
    }

    /// # get the racer's login account
    /// `None` when the racer has no user account linked.
    pub fn get_user(&self, conn: &mut PgConnection) -> QueryResult<Option<User>> {
        match self.user_id {
            Some(user_id) => User::get_by_id(conn, user_id).map(Some),
            None => Ok(None),
        }
    }

    /// # get the racer's sponsor
    /// `None` when the racer runs unsponsored.
    pub fn get_sponsor(&self, conn: &mut PgConnection) -> QueryResult<Option<Sponsor>> {
        match self.sponsor_id {
            Some(sponsor_id) => Sponsor::get_by_id(conn, sponsor_id).map(Some),
            None => Ok(None),
        }
    }

    /// # set championship points
    pub fn set_points(&self, conn: &mut PgConnection, points_in: i32) -> QueryResult<Racer> {
        use crate::schema::racers::dsl::*;

        diesel::update(racers.filter(id.eq(self.id)))
            .set(points.eq(points_in))
            .get_result(conn)
    }

    /// # link a login account
    pub fn attach_user(&self, conn: &mut PgConnection, user_id_in: i32) -> QueryResult<Racer> {
        use crate::schema::racers::dsl::*;

        diesel::update(racers.filter(id.eq(self.id)))
            .set(user_id.eq(user_id_in))
            .get_result(conn)
    }

    /// # link a sponsor
    pub fn attach_sponsor(
        &self,
        conn: &mut PgConnection,
        sponsor_id_in: i32,
    ) -> QueryResult<Racer> {
        use crate::schema::racers::dsl::*;

        diesel::update(racers.filter(id.eq(self.id)))
            .set(sponsor_id.eq(sponsor_id_in))
            .get_result(conn)
    }

    pub fn delete(&self, conn: &mut PgConnection) -> QueryResult<usize> {
        Racer::delete_by_id(conn, self.id)
    }

    pub fn delete_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<usize> {
        diesel::delete(racers::table.filter(racers::id.eq(id_in))).execute(conn)
    }

    pub fn to_new(&self) -> NewRacer {
        NewRacer {
            email: self.email.clone(),
            user_id: self.user_id,
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            points: self.points,
            sponsor_id: self.sponsor_id,
        }
    }
}

impl fmt::Display for Racer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Racer {}>", self.name)
    }
}
