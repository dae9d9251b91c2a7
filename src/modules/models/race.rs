use std::fmt;

use diesel::pg::PgConnection;
use diesel::prelude::*;
use log::error;
use serde::{Deserialize, Serialize};

use crate::macros::database_error_handler::db_handle_get_error;
use crate::models::NewRace;
use crate::modules::models::event::Event;
use crate::modules::models::racer::Racer;
use crate::modules::models::track::Track;
use crate::schema::races;

#[derive(Queryable, Serialize, Identifiable, PartialEq, Debug, Clone, Deserialize)]
pub struct Race {
    pub id: i32,
    pub racer_id: i32,
    pub track_id: i32,
    pub event_id: i32,
    pub time: String,
}

impl Race {
    /// # create race
    /// record a race result for a racer on a track at an event. all three
    /// references must point at existing rows.
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `racer_id_in` - the driver
    /// * `track_id_in` - the track raced on
    /// * `event_id_in` - the event the race was part of
    /// * `time_in` - the recorded time, kept as text
    pub fn new(
        conn: &mut PgConnection,
        racer_id_in: i32,
        track_id_in: i32,
        event_id_in: i32,
        time_in: &str,
    ) -> QueryResult<Race> {
        let new_race = NewRace {
            racer_id: racer_id_in,
            track_id: track_id_in,
            event_id: event_id_in,
            time: time_in.to_string(),
        };

        match diesel::insert_into(races::table)
            .values(&new_race)
            .get_result(conn)
        {
            Ok(race) => Ok(race),
            Err(e) => {
                error!(target:"models/race:new", "Error creating race: {}", e);
                Err(e)
            }
        }
    }

    pub fn get_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<Race> {
        use crate::schema::races::dsl::*;

        let race = db_handle_get_error!(
            races.filter(id.eq(id_in)).first::<Race>(conn),
            "models/race:get_by_id",
            "race"
        );

        Ok(race)
    }

    pub fn get_by_event(conn: &mut PgConnection, event_id_in: i32) -> QueryResult<Vec<Race>> {
        use crate::schema::races::dsl::*;
        races.filter(event_id.eq(event_id_in)).load::<Race>(conn)
    }

    pub fn get_by_racer(conn: &mut PgConnection, racer_id_in: i32) -> QueryResult<Vec<Race>> {
        use crate::schema::races::dsl::*;
        races.filter(racer_id.eq(racer_id_in)).load::<Race>(conn)
    }

    pub fn get_all(conn: &mut PgConnection) -> QueryResult<Vec<Race>> {
        use crate::schema::races::dsl::*;
        races.load::<Race>(conn)
    }

    pub fn get_racer(&self, conn: &mut PgConnection) -> QueryResult<Racer> {
        Racer::get_by_id(conn, self.racer_id)
    }

    pub fn get_track(&self, conn: &mut PgConnection) -> QueryResult<Track> {
        Track::get_by_id(conn, self.track_id)
    }

    pub fn get_event(&self, conn: &mut PgConnection) -> QueryResult<Event> {
        Event::get_by_id(conn, self.event_id)
    }

    pub fn delete(&self, conn: &mut PgConnection) -> QueryResult<usize> {
        Race::delete_by_id(conn, self.id)
    }

    pub fn delete_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<usize> {
        diesel::delete(races::table.filter(races::id.eq(id_in))).execute(conn)
    }

    pub fn to_new(&self) -> NewRace {
        NewRace {
            racer_id: self.racer_id,
            track_id: self.track_id,
            event_id: self.event_id,
            time: self.time.clone(),
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Race racer='{}' track='{}' event='{}'>",
            self.racer_id, self.track_id, self.event_id
        )
    }
}
