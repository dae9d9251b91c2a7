use std::fmt;

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::dsl::exists;
use diesel::select;
use log::error;
use serde::{Deserialize, Serialize};

use crate::macros::database_error_handler::db_handle_get_error;
use crate::models::NewSponsor;
use crate::schema::sponsors;

#[derive(Queryable, Serialize, Identifiable, PartialEq, Debug, Clone, Deserialize)]
pub struct Sponsor {
    pub id: i32,
    pub name: Option<String>,
}

impl Sponsor {
    pub fn new(conn: &mut PgConnection, name_in: Option<&str>) -> QueryResult<Sponsor> {
        let new_sponsor = NewSponsor {
            name: name_in.map(|n| n.to_string()),
        };

        match diesel::insert_into(sponsors::table)
            .values(&new_sponsor)
            .get_result(conn)
        {
            Ok(sponsor) => Ok(sponsor),
            Err(e) => {
                error!(target:"models/sponsor:new", "Error creating sponsor: {}", e);
                Err(e)
            }
        }
    }

    pub fn exists(conn: &mut PgConnection, name_in: &str) -> bool {
        use crate::schema::sponsors::dsl::*;
        select(exists(sponsors.filter(name.eq(name_in))))
            .get_result(conn)
            .unwrap()
    }

    pub fn get_by_name(conn: &mut PgConnection, name_in: &str) -> QueryResult<Sponsor> {
        use crate::schema::sponsors::dsl::*;

        let sponsor = db_handle_get_error!(
            sponsors.filter(name.eq(name_in)).first::<Sponsor>(conn),
            "models/sponsor:get_by_name",
            "sponsor"
        );

        Ok(sponsor)
    }

    pub fn get_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<Sponsor> {
        use crate::schema::sponsors::dsl::*;

        let sponsor = db_handle_get_error!(
            sponsors.filter(id.eq(id_in)).first::<Sponsor>(conn),
            "models/sponsor:get_by_id",
            "sponsor"
        );

        Ok(sponsor)
    }

    pub fn get_all(conn: &mut PgConnection) -> QueryResult<Vec<Sponsor>> {
        use crate::schema::sponsors::dsl::*;
        sponsors.load::<Sponsor>(conn)
    }

    pub fn ensure_exists(conn: &mut PgConnection, name_in: &str) -> QueryResult<Sponsor> {
        if !Sponsor::exists(conn, name_in) {
            Sponsor::new(conn, Some(name_in))
        } else {
            Sponsor::get_by_name(conn, name_in)
        }
    }

    pub fn delete(&self, conn: &mut PgConnection) -> QueryResult<usize> {
        Sponsor::delete_by_id(conn, self.id)
    }

    pub fn delete_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<usize> {
        diesel::delete(sponsors::table.filter(sponsors::id.eq(id_in))).execute(conn)
    }

    pub fn to_new(&self) -> NewSponsor {
        NewSponsor {
            name: self.name.clone(),
        }
    }
}

impl fmt::Display for Sponsor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Sponsor {}>", self.name.as_deref().unwrap_or("unnamed"))
    }
}
