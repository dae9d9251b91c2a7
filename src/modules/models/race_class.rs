use std::fmt;

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::dsl::exists;
use diesel::select;
use log::error;
use serde::{Deserialize, Serialize};

use crate::macros::database_error_handler::db_handle_get_error;
use crate::models::NewRaceClass;
use crate::schema::raceclasses;

#[derive(Queryable, Serialize, Identifiable, PartialEq, Debug, Clone, Deserialize)]
#[diesel(table_name = raceclasses)]
pub struct RaceClass {
    pub id: i32,
    pub name: String,
}

impl RaceClass {
    pub fn new(conn: &mut PgConnection, name_in: &str) -> QueryResult<RaceClass> {
        let new_race_class = NewRaceClass {
            name: name_in.to_string(),
        };

        match diesel::insert_into(raceclasses::table)
            .values(&new_race_class)
            .get_result(conn)
        {
            Ok(race_class) => Ok(race_class),
            Err(e) => {
                error!(target:"models/race_class:new", "Error creating race class: {}", e);
                Err(e)
            }
        }
    }

    pub fn exists(conn: &mut PgConnection, name_in: &str) -> bool {
        use crate::schema::raceclasses::dsl::*;
        select(exists(raceclasses.filter(name.eq(name_in))))
            .get_result(conn)
            .unwrap()
    }

    pub fn get_by_name(conn: &mut PgConnection, name_in: &str) -> QueryResult<RaceClass> {
        use crate::schema::raceclasses::dsl::*;

        let race_class = db_handle_get_error!(
            raceclasses.filter(name.eq(name_in)).first::<RaceClass>(conn),
            "models/race_class:get_by_name",
            "race class"
        );

        Ok(race_class)
    }

    pub fn get_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<RaceClass> {
        use crate::schema::raceclasses::dsl::*;

        let race_class = db_handle_get_error!(
            raceclasses.filter(id.eq(id_in)).first::<RaceClass>(conn),
            "models/race_class:get_by_id",
            "race class"
        );

        Ok(race_class)
    }

    pub fn get_all(conn: &mut PgConnection) -> QueryResult<Vec<RaceClass>> {
        use crate::schema::raceclasses::dsl::*;
        raceclasses.load::<RaceClass>(conn)
    }

    pub fn ensure_exists(conn: &mut PgConnection, name_in: &str) -> QueryResult<RaceClass> {
        if !RaceClass::exists(conn, name_in) {
            RaceClass::new(conn, name_in)
        } else {
            RaceClass::get_by_name(conn, name_in)
        }
    }

    pub fn delete(&self, conn: &mut PgConnection) -> QueryResult<usize> {
        RaceClass::delete_by_id(conn, self.id)
    }

    pub fn delete_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<usize> {
        diesel::delete(raceclasses::table.filter(raceclasses::id.eq(id_in))).execute(conn)
    }

    pub fn to_new(&self) -> NewRaceClass {
        NewRaceClass {
            name: self.name.clone(),
        }
    }
}

impl fmt::Display for RaceClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<RaceClass {}>", self.name)
    }
}
