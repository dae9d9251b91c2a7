use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::CustomResult;
use crate::modules::helpers::password::hash_password;
use crate::schema::*;

#[derive(Insertable, Serialize, Debug, Clone, Deserialize)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub registered_on: NaiveDateTime,
    pub admin: bool,
}

impl NewUser {
    /// # build a new user row
    /// hashes the plaintext password with the given bcrypt cost and stamps
    /// the registration time. the plaintext is never stored.
    ///
    /// ## Arguments
    /// * `email` - the login email
    /// * `plaintext` - the password as entered, hashed before it ever hits a row
    /// * `admin` - whether the user is an administrator
    /// * `cost` - the bcrypt work factor, supplied by the hosting application
    pub fn from_plaintext(
        email: &str,
        plaintext: &str,
        admin: bool,
        cost: u32,
    ) -> CustomResult<NewUser> {
        Ok(NewUser {
            email: email.to_string(),
            password: hash_password(plaintext, cost)?,
            registered_on: chrono::Local::now().naive_local(),
            admin,
        })
    }
}

#[derive(Insertable, Serialize, Debug, Clone, Deserialize)]
#[diesel(table_name = sponsors)]
pub struct NewSponsor {
    pub name: Option<String>,
}

#[derive(Insertable, Serialize, Debug, Clone, Deserialize)]
#[diesel(table_name = raceclasses)]
pub struct NewRaceClass {
    pub name: String,
}

#[derive(Insertable, Serialize, Debug, Clone, Deserialize)]
#[diesel(table_name = events)]
pub struct NewEvent {
    pub name: String,
    pub date: NaiveDate,
}

#[derive(Insertable, Serialize, Debug, Clone, Deserialize)]
#[diesel(table_name = tracks)]
pub struct NewTrack {
    pub name: String,
    pub event_id: Option<i32>,
}

#[derive(Insertable, Serialize, Debug, Clone, Deserialize)]
#[diesel(table_name = racers)]
pub struct NewRacer {
    pub email: String,
    pub user_id: Option<i32>,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub points: Option<i32>,
    pub sponsor_id: Option<i32>,
}

#[derive(Insertable, Serialize, Debug, Clone, Deserialize)]
#[diesel(table_name = cars)]
pub struct NewCar {
    pub make: String,
    pub model: String,
    pub year: String,
    pub color: String,
    pub number: String,
    pub racer_id: Option<i32>,
}

#[derive(Insertable, Serialize, Debug, Clone, Deserialize)]
#[diesel(table_name = races)]
pub struct NewRace {
    pub racer_id: i32,
    pub track_id: i32,
    pub event_id: i32,
    pub time: String,
}

#[derive(Insertable, Serialize, Debug, Clone, Deserialize)]
#[diesel(table_name = bestlaps)]
pub struct NewBestLap {
    pub racer_id: i32,
    pub raceclass_id: i32,
    pub event_id: i32,
    pub track_id: i32,
    pub time: f64,
    pub is_best: bool,
}

#[derive(Insertable, Serialize, Debug, Clone, Deserialize)]
#[diesel(table_name = records)]
pub struct NewRecord {
    pub csv: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::helpers::password::verify_password;

    const TEST_COST: u32 = 4;

    #[test]
    fn new_user_never_stores_the_plaintext() {
        let new_user = NewUser::from_plaintext("driver@example.com", "hunter2", false, TEST_COST)
            .expect("failed to build user");

        assert_ne!(new_user.password, "hunter2");
        assert!(verify_password("hunter2", &new_user.password).unwrap());
        assert!(!verify_password("hunter3", &new_user.password).unwrap());
    }

    #[test]
    fn new_user_defaults() {
        let new_user = NewUser::from_plaintext("driver@example.com", "hunter2", false, TEST_COST)
            .expect("failed to build user");

        assert_eq!(new_user.email, "driver@example.com");
        assert!(!new_user.admin);
        assert!(new_user.registered_on <= chrono::Local::now().naive_local());
    }
}
