//! integration tests against a live database.
//!
//! they need a migrated postgres database reachable through `DATABASE_URL`
//! (a `.env` file works), so they are ignored by default:
//!
//! ```sh
//! diesel migration run
//! cargo test -- --ignored
//! ```
//!
//! every test runs inside a test transaction and rolls back on its own.

use chrono::NaiveDate;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use race_central::errors::Error;
use race_central::modules::models::car::Car;
use race_central::modules::models::event::Event;
use race_central::modules::models::general::establish_connection;
use race_central::modules::models::race::Race;
use race_central::modules::models::race_class::RaceClass;
use race_central::modules::models::racer::Racer;
use race_central::modules::models::record::Record;
use race_central::modules::models::sponsor::Sponsor;
use race_central::modules::models::track::Track;
use race_central::modules::models::user::User;

// low bcrypt work factor to keep the tests fast
const TEST_COST: u32 = 4;

fn connection() -> PgConnection {
    let mut conn = establish_connection();
    conn.begin_test_transaction()
        .expect("failed to open test transaction");
    conn
}

fn event_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 18).unwrap()
}

#[test]
#[ignore = "requires a migrated postgres database at DATABASE_URL"]
fn stored_password_is_a_verifiable_hash() {
    let conn = &mut connection();

    let user = User::new(conn, "pilot@example.com", "pit-lane-42", false, TEST_COST)
        .expect("failed to create user");

    assert_ne!(user.password, "pit-lane-42");
    assert!(user.verify_password("pit-lane-42"));
    assert!(!user.verify_password("pit-lane-43"));
}

#[test]
#[ignore = "requires a migrated postgres database at DATABASE_URL"]
fn duplicate_user_email_is_a_unique_violation() {
    let conn = &mut connection();

    User::new(conn, "pilot@example.com", "first", false, TEST_COST)
        .expect("failed to create user");
    let duplicate = User::new(conn, "pilot@example.com", "second", false, TEST_COST);

    assert!(matches!(
        duplicate,
        Err(Error::Database(DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            _
        )))
    ));
}

#[test]
#[ignore = "requires a migrated postgres database at DATABASE_URL"]
fn duplicate_racer_email_is_a_unique_violation() {
    let conn = &mut connection();

    Racer::new(conn, "racer@example.com", "Jo", None, None, None, None, None)
        .expect("failed to create racer");
    let duplicate = Racer::new(conn, "racer@example.com", "Flo", None, None, None, None, None);

    assert!(matches!(
        duplicate,
        Err(DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            _
        ))
    ));
}

#[test]
#[ignore = "requires a migrated postgres database at DATABASE_URL"]
fn track_with_dangling_event_is_a_foreign_key_violation() {
    let conn = &mut connection();

    let result = Track::new(conn, "Turn One", Some(i32::MAX));

    assert!(matches!(
        result,
        Err(DieselError::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation,
            _
        ))
    ));
}

#[test]
#[ignore = "requires a migrated postgres database at DATABASE_URL"]
fn deleting_an_event_leaves_other_events_tracks_alone() {
    let conn = &mut connection();

    let spring = Event::new(conn, "Spring Cup", event_date()).unwrap();
    let autumn = Event::new(conn, "Autumn Cup", event_date()).unwrap();
    let spring_track = Track::new(conn, "Spring Circuit", Some(spring.id)).unwrap();
    let autumn_track = Track::new(conn, "Autumn Circuit", Some(autumn.id)).unwrap();

    spring.delete_with_tracks(conn).unwrap();

    assert!(matches!(
        Event::get_by_id(conn, spring.id),
        Err(DieselError::NotFound)
    ));
    assert!(matches!(
        Track::get_by_id(conn, spring_track.id),
        Err(DieselError::NotFound)
    ));

    let survivor = Track::get_by_id(conn, autumn_track.id).unwrap();
    assert_eq!(survivor, autumn_track);
    assert_eq!(autumn.get_tracks(conn).unwrap(), vec![autumn_track]);
}

#[test]
#[ignore = "requires a migrated postgres database at DATABASE_URL"]
fn racer_starts_bare_and_gets_a_car_attached_later() {
    let conn = &mut connection();

    let racer = Racer::new(
        conn,
        "racer@example.com",
        "Jo Slick",
        Some("Springfield"),
        Some("IL"),
        None,
        None,
        None,
    )
    .unwrap();

    assert_eq!(racer.get_car(conn).unwrap(), None);
    assert_eq!(racer.get_sponsor(conn).unwrap(), None);
    assert_eq!(racer.get_user(conn).unwrap(), None);

    let car = Car::new(conn, "Lola", "T70", "1969", "red", "7", None).unwrap();
    assert_eq!(car.racer_id, None);

    let car = car.attach_to_racer(conn, racer.id).unwrap();
    assert_eq!(car.racer_id, Some(racer.id));

    let looked_up = Racer::get_by_email(conn, "racer@example.com").unwrap();
    assert_eq!(looked_up.get_car(conn).unwrap(), Some(car));
}

#[test]
#[ignore = "requires a migrated postgres database at DATABASE_URL"]
fn attaching_a_sponsor_is_visible_through_the_racer() {
    let conn = &mut connection();

    let sponsor = Sponsor::ensure_exists(conn, "Fast Oil Co").unwrap();
    let racer = Racer::new(conn, "racer@example.com", "Jo", None, None, None, None, None).unwrap();

    let racer = racer.attach_sponsor(conn, sponsor.id).unwrap();
    assert_eq!(racer.get_sponsor(conn).unwrap(), Some(sponsor));
}

#[test]
#[ignore = "requires a migrated postgres database at DATABASE_URL"]
fn reloading_by_primary_key_round_trips_every_field() {
    let conn = &mut connection();

    let event = Event::new(conn, "Spring Cup", event_date()).unwrap();
    assert_eq!(Event::get_by_id(conn, event.id).unwrap(), event);

    let racer = Racer::new(
        conn,
        "racer@example.com",
        "Jo Slick",
        Some("Springfield"),
        Some("IL"),
        Some(120),
        None,
        None,
    )
    .unwrap();
    assert_eq!(Racer::get_by_id(conn, racer.id).unwrap(), racer);

    let track = Track::new(conn, "Spring Circuit", Some(event.id)).unwrap();
    let race = Race::new(conn, racer.id, track.id, event.id, "1:23.456").unwrap();
    assert_eq!(Race::get_by_id(conn, race.id).unwrap(), race);

    let record = Record::new(conn, b"driver,time\nJo,83.456\n".to_vec()).unwrap();
    assert_eq!(Record::get_by_id(conn, record.id).unwrap(), record);
}

#[test]
#[ignore = "requires a migrated postgres database at DATABASE_URL"]
fn best_lap_record_lookup_honors_the_flag() {
    use race_central::modules::models::best_lap::BestLap;

    let conn = &mut connection();

    let event = Event::new(conn, "Spring Cup", event_date()).unwrap();
    let track = Track::new(conn, "Spring Circuit", Some(event.id)).unwrap();
    let class = RaceClass::ensure_exists(conn, "GT3").unwrap();
    let racer = Racer::new(conn, "racer@example.com", "Jo", None, None, None, None, None).unwrap();

    assert_eq!(BestLap::best_for_track(conn, track.id, class.id).unwrap(), None);

    let slow = BestLap::new(conn, racer.id, class.id, event.id, track.id, 84.2, false).unwrap();
    let fast = BestLap::new(conn, racer.id, class.id, event.id, track.id, 83.1, true).unwrap();

    assert_eq!(
        BestLap::best_for_track(conn, track.id, class.id).unwrap(),
        Some(fast.clone())
    );

    // moving the flag moves the record
    let fast = fast.set_is_best(conn, false).unwrap();
    let slow = slow.set_is_best(conn, true).unwrap();
    assert!(!fast.is_best);
    assert_eq!(
        BestLap::best_for_track(conn, track.id, class.id).unwrap(),
        Some(slow)
    );
}

#[test]
#[ignore = "requires a migrated postgres database at DATABASE_URL"]
fn racer_links_to_its_user_account() {
    let conn = &mut connection();

    let user = User::new(conn, "pilot@example.com", "pit-lane-42", false, TEST_COST).unwrap();
    let racer = Racer::new(
        conn,
        "racer@example.com",
        "Jo",
        None,
        None,
        None,
        Some(user.id),
        None,
    )
    .unwrap();

    assert_eq!(racer.get_user(conn).unwrap(), Some(user.clone()));

    let promoted = user.set_admin(conn, true).unwrap();
    assert!(promoted.admin);
}
