use std::env;

use dotenvy::dotenv;
use log::{error, info};

use race_central::modules::helpers::logging::setup_logging;
use race_central::modules::models::general::establish_connection;
use race_central::modules::models::user::User;

const DEFAULT_BCRYPT_COST: u32 = 12;

fn main() {
    dotenv().ok();
    setup_logging().expect("failed to setup logging");

    let email = match env::var("ADMIN_EMAIL") {
        Ok(email) => email,
        Err(_) => {
            error!(target:"create_admin", "ADMIN_EMAIL is not set");
            return;
        }
    };
    let password = match env::var("ADMIN_PASSWORD") {
        Ok(password) => password,
        Err(_) => {
            error!(target:"create_admin", "ADMIN_PASSWORD is not set");
            return;
        }
    };
    let cost = env::var("BCRYPT_COST")
        .ok()
        .and_then(|c| c.parse().ok())
        .unwrap_or(DEFAULT_BCRYPT_COST);

    let connection = &mut establish_connection();

    if User::exists(connection, &email) {
        info!(target:"create_admin", "user already exists: {}", email);
        return;
    }

    match User::new(connection, &email, &password, true, cost) {
        Ok(user) => {
            info!(target:"create_admin", "created admin user: {}", user);
        }
        Err(err) => {
            error!(target:"create_admin", "failed creating admin user. (error: {})", err);
        }
    }
}
