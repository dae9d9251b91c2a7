use std::fmt;

use diesel::pg::PgConnection;
use diesel::prelude::*;
use log::error;
use serde::{Deserialize, Serialize};

use crate::macros::database_error_handler::db_handle_get_error;
use crate::models::NewRecord;
use crate::schema::records;

/// an opaque CSV export blob, stored as handed in. parsing the contents
/// is up to the import tooling, not this layer.
#[derive(Queryable, Serialize, Identifiable, PartialEq, Debug, Clone, Deserialize)]
pub struct Record {
    pub id: i32,
    pub csv: Vec<u8>,
}

impl Record {
    pub fn new(conn: &mut PgConnection, csv_in: Vec<u8>) -> QueryResult<Record> {
        let new_record = NewRecord { csv: csv_in };

        match diesel::insert_into(records::table)
            .values(&new_record)
            .get_result(conn)
        {
            Ok(record) => Ok(record),
            Err(e) => {
                error!(target:"models/record:new", "Error creating record: {}", e);
                Err(e)
            }
        }
    }

    pub fn get_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<Record> {
        use crate::schema::records::dsl::*;

        let record = db_handle_get_error!(
            records.filter(id.eq(id_in)).first::<Record>(conn),
            "models/record:get_by_id",
            "record"
        );

        Ok(record)
    }

    pub fn get_all(conn: &mut PgConnection) -> QueryResult<Vec<Record>> {
        use crate::schema::records::dsl::*;
        records.load::<Record>(conn)
    }

    pub fn delete(&self, conn: &mut PgConnection) -> QueryResult<usize> {
        Record::delete_by_id(conn, self.id)
    }

    pub fn delete_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<usize> {
        diesel::delete(records::table.filter(records::id.eq(id_in))).execute(conn)
    }

    pub fn to_new(&self) -> NewRecord {
        NewRecord {
            csv: self.csv.clone(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Record {} bytes>", self.csv.len())
    }
}
