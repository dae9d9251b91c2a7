use std::env;
use std::fs;

use dotenvy::dotenv;
use log::{error, info};

use race_central::modules::helpers::logging::setup_logging;
use race_central::modules::models::general::establish_connection;
use race_central::modules::models::record::Record;

/// store a CSV export file as an opaque record row. the contents are not
/// parsed here; the record table is the bulk import/export drop zone.
fn main() {
    dotenv().ok();
    setup_logging().expect("failed to setup logging");

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            error!(target:"load_record_from_file", "usage: load_record_from_file <path-to-csv>");
            return;
        }
    };

    let csv = match fs::read(&path) {
        Ok(csv) => csv,
        Err(err) => {
            error!(target:"load_record_from_file", "failed reading file. (path: {}, error: {})", path, err);
            return;
        }
    };

    let connection = &mut establish_connection();
    match Record::new(connection, csv) {
        Ok(record) => {
            info!(target:"load_record_from_file", "stored record: {}", record);
        }
        Err(err) => {
            error!(target:"load_record_from_file", "failed storing record. (error: {})", err);
        }
    }
}
