use std::fmt;

use diesel::pg::PgConnection;
use diesel::prelude::*;
use log::error;
use serde::{Deserialize, Serialize};

use crate::macros::database_error_handler::db_handle_get_error;
use crate::models::NewTrack;
use crate::modules::models::event::Event;
use crate::schema::tracks;

#[derive(Queryable, Serialize, Identifiable, PartialEq, Debug, Clone, Deserialize)]
pub struct Track {
    pub id: i32,
    pub name: String,
    pub event_id: Option<i32>,
}

impl Track {
    /// # create track
    /// create a new track, optionally attached to the event that owns it.
    /// the referenced event must exist, otherwise the storage engine
    /// rejects the insert with a foreign key violation.
    pub fn new(
        conn: &mut PgConnection,
        name_in: &str,
        event_id_in: Option<i32>,
    ) -> QueryResult<Track> {
        let new_track = NewTrack {
            name: name_in.to_string(),
            event_id: event_id_in,
        };

        match diesel::insert_into(tracks::table)
            .values(&new_track)
            .get_result(conn)
        {
            Ok(track) => Ok(track),
            Err(e) => {
                error!(target:"models/track:new", "Error creating track: {}", e);
                Err(e)
            }
        }
    }

    pub fn get_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<Track> {
        use crate::schema::tracks::dsl::*;

        let track = db_handle_get_error!(
            tracks.filter(id.eq(id_in)).first::<Track>(conn),
            "models/track:get_by_id",
            "track"
        );

        Ok(track)
    }

    pub fn get_by_name(conn: &mut PgConnection, name_in: &str) -> QueryResult<Track> {
        use crate::schema::tracks::dsl::*;

        let track = db_handle_get_error!(
            tracks.filter(name.eq(name_in)).first::<Track>(conn),
            "models/track:get_by_name",
            "track"
        );

        Ok(track)
    }

    pub fn get_all(conn: &mut PgConnection) -> QueryResult<Vec<Track>> {
        use crate::schema::tracks::dsl::*;
        tracks.load::<Track>(conn)
    }

    /// # get the owning event
    /// resolve the event this track belongs to, `None` when detached.
    pub fn get_event(&self, conn: &mut PgConnection) -> QueryResult<Option<Event>> {
        match self.event_id {
            Some(event_id) => Event::get_by_id(conn, event_id).map(Some),
            None => Ok(None),
        }
    }

    pub fn delete(&self, conn: &mut PgConnection) -> QueryResult<usize> {
        Track::delete_by_id(conn, self.id)
    }

    pub fn delete_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<usize> {
        diesel::delete(tracks::table.filter(tracks::id.eq(id_in))).execute(conn)
    }

    pub fn to_new(&self) -> NewTrack {
        NewTrack {
            name: self.name.clone(),
            event_id: self.event_id,
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Track {}>", self.name)
    }
}
