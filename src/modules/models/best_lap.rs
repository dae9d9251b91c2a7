use std::fmt;

use diesel::pg::PgConnection;
use diesel::prelude::*;
use log::error;
use serde::{Deserialize, Serialize};

use crate::macros::database_error_handler::db_handle_get_error;
use crate::models::NewBestLap;
use crate::schema::bestlaps;

#[derive(Queryable, Serialize, Identifiable, PartialEq, Debug, Clone, Deserialize)]
#[diesel(table_name = bestlaps)]
pub struct BestLap {
    pub id: i32,
    pub racer_id: i32,
    pub raceclass_id: i32,
    pub event_id: i32,
    pub track_id: i32,
    pub time: f64,
    pub is_best: bool,
}

impl BestLap {
    /// # record a best lap
    /// store a lap time for a racer in a class, at an event, on a track.
    /// `is_best` marks the record-holding lap for that scope; keeping the
    /// flag consistent across laps in the same scope is the caller's job.
    pub fn new(
        conn: &mut PgConnection,
        racer_id_in: i32,
        raceclass_id_in: i32,
        event_id_in: i32,
        track_id_in: i32,
        time_in: f64,
        is_best_in: bool,
    ) -> QueryResult<BestLap> {
        let new_best_lap = NewBestLap {
            racer_id: racer_id_in,
            raceclass_id: raceclass_id_in,
            event_id: event_id_in,
            track_id: track_id_in,
            time: time_in,
            is_best: is_best_in,
        };

        match diesel::insert_into(bestlaps::table)
            .values(&new_best_lap)
            .get_result(conn)
        {
            Ok(best_lap) => Ok(best_lap),
            Err(e) => {
                error!(target:"models/best_lap:new", "Error creating best lap: {}", e);
                Err(e)
            }
        }
    }

    pub fn get_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<BestLap> {
        use crate::schema::bestlaps::dsl::*;

        let best_lap = db_handle_get_error!(
            bestlaps.filter(id.eq(id_in)).first::<BestLap>(conn),
            "models/best_lap:get_by_id",
            "best lap"
        );

        Ok(best_lap)
    }

    pub fn get_by_racer(conn: &mut PgConnection, racer_id_in: i32) -> QueryResult<Vec<BestLap>> {
        use crate::schema::bestlaps::dsl::*;
        bestlaps
            .filter(racer_id.eq(racer_id_in))
            .load::<BestLap>(conn)
    }

    pub fn get_all(conn: &mut PgConnection) -> QueryResult<Vec<BestLap>> {
        use crate::schema::bestlaps::dsl::*;
        bestlaps.load::<BestLap>(conn)
    }

    /// # get the record lap for a track and class
    /// the lap flagged as record holder for the given track and race class,
    /// `None` when nothing has been flagged yet.
    pub fn best_for_track(
        conn: &mut PgConnection,
        track_id_in: i32,
        raceclass_id_in: i32,
    ) -> QueryResult<Option<BestLap>> {
        use crate::schema::bestlaps::dsl::*;

        bestlaps
            .filter(track_id.eq(track_id_in))
            .filter(raceclass_id.eq(raceclass_id_in))
            .filter(is_best.eq(true))
            .order(time.asc())
            .first::<BestLap>(conn)
            .optional()
    }

    /// # flag or unflag the lap as record holder
    pub fn set_is_best(&self, conn: &mut PgConnection, is_best_in: bool) -> QueryResult<BestLap> {
        use crate::schema::bestlaps::dsl::*;

        diesel::update(bestlaps.filter(id.eq(self.id)))
            .set(is_best.eq(is_best_in))
            .get_result(conn)
    }

    pub fn delete(&self, conn: &mut PgConnection) -> QueryResult<usize> {
        BestLap::delete_by_id(conn, self.id)
    }

    pub fn delete_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<usize> {
        diesel::delete(bestlaps::table.filter(bestlaps::id.eq(id_in))).execute(conn)
    }

    pub fn to_new(&self) -> NewBestLap {
        NewBestLap {
            racer_id: self.racer_id,
            raceclass_id: self.raceclass_id,
            event_id: self.event_id,
            track_id: self.track_id,
            time: self.time,
            is_best: self.is_best,
        }
    }
}

impl fmt::Display for BestLap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<BestLap racer='{}' raceclass='{}' track='{}' time='{}'>",
            self.racer_id, self.raceclass_id, self.track_id, self.time
        )
    }
}
