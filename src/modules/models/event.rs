use std::fmt;

use chrono::NaiveDate;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::dsl::exists;
use diesel::select;
use log::error;
use serde::{Deserialize, Serialize};

use crate::macros::database_error_handler::db_handle_get_error;
use crate::models::NewEvent;
use crate::modules::models::track::Track;
use crate::schema::{events, tracks};

#[derive(Queryable, Serialize, Identifiable, PartialEq, Debug, Clone, Deserialize)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub date: NaiveDate,
}

impl Event {
    /// # create event
    /// create a new race event on the given date.
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `name_in` - the event name
    /// * `date_in` - the day the event takes place
    ///
    /// ## Returns
    /// * `Event` - the stored event
    pub fn new(conn: &mut PgConnection, name_in: &str, date_in: NaiveDate) -> QueryResult<Event> {
        let new_event = NewEvent {
            name: name_in.to_string(),
            date: date_in,
        };

        match diesel::insert_into(events::table)
            .values(&new_event)
            .get_result(conn)
        {
            Ok(event) => Ok(event),
            Err(e) => {
                error!(target:"models/event:new", "Error creating event: {}", e);
                Err(e)
            }
        }
    }

    pub fn exists(conn: &mut PgConnection, name_in: &str) -> bool {
        use crate::schema::events::dsl::*;
        select(exists(events.filter(name.eq(name_in))))
            .get_result(conn)
            .unwrap()
    }

    pub fn get_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<Event> {
        use crate::schema::events::dsl::*;

        let event = db_handle_get_error!(
            events.filter(id.eq(id_in)).first::<Event>(conn),
            "models/event:get_by_id",
            "event"
        );

        Ok(event)
    }

    pub fn get_by_name(conn: &mut PgConnection, name_in: &str) -> QueryResult<Event> {
        use crate::schema::events::dsl::*;

        let event = db_handle_get_error!(
            events.filter(name.eq(name_in)).first::<Event>(conn),
            "models/event:get_by_name",
            "event"
        );

        Ok(event)
    }

    pub fn get_all(conn: &mut PgConnection) -> QueryResult<Vec<Event>> {
        use crate::schema::events::dsl::*;
        events.load::<Event>(conn)
    }

    /// # get all events sorted by date
    pub fn get_all_chronologically(conn: &mut PgConnection) -> QueryResult<Vec<Event>> {
        use crate::schema::events::dsl::*;
        events.order(date.asc()).load::<Event>(conn)
    }

    /// # get the tracks of the event
    /// only tracks attached to this event are returned.
    pub fn get_tracks(&self, conn: &mut PgConnection) -> QueryResult<Vec<Track>> {
        tracks::table
            .filter(tracks::event_id.eq(self.id))
            .load::<Track>(conn)
    }

    pub fn delete(&self, conn: &mut PgConnection) -> QueryResult<usize> {
        Event::delete_by_id(conn, self.id)
    }

    pub fn delete_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<usize> {
        diesel::delete(events::table.filter(events::id.eq(id_in))).execute(conn)
    }

    /// # delete event and its tracks
    /// delete the event together with the tracks it owns. the schema does
    /// not cascade, so callers that want the dependent rows gone use this
    /// instead of `delete`. tracks of other events are untouched.
    pub fn delete_with_tracks(&self, conn: &mut PgConnection) -> QueryResult<usize> {
        diesel::delete(tracks::table.filter(tracks::event_id.eq(self.id))).execute(conn)?;
        Event::delete_by_id(conn, self.id)
    }

    pub fn to_new(&self) -> NewEvent {
        NewEvent {
            name: self.name.clone(),
            date: self.date,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Event {}>", self.name)
    }
}
