use std::fmt;

use diesel::pg::PgConnection;
use diesel::prelude::*;
use log::error;
use serde::{Deserialize, Serialize};

use crate::macros::database_error_handler::db_handle_get_error;
use crate::models::NewCar;
use crate::schema::cars;

#[derive(Queryable, Serialize, Identifiable, PartialEq, Debug, Clone, Deserialize)]
pub struct Car {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: String,
    pub color: String,
    pub number: String,
    pub racer_id: Option<i32>,
}

impl Car {
    /// # create car
    /// create a new car. the five descriptive fields are all required;
    /// the owning racer is optional and can be attached afterwards.
    pub fn new(
        conn: &mut PgConnection,
        make_in: &str,
        model_in: &str,
        year_in: &str,
        color_in: &str,
        number_in: &str,
        racer_id_in: Option<i32>,
    ) -> QueryResult<Car> {
        let new_car = NewCar {
            make: make_in.to_string(),
            model: model_in.to_string(),
            year: year_in.to_string(),
            color: color_in.to_string(),
            number: number_in.to_string(),
            racer_id: racer_id_in,
        };

        match diesel::insert_into(cars::table)
            .values(&new_car)
            .get_result(conn)
        {
            Ok(car) => Ok(car),
            Err(e) => {
                error!(target:"models/car:new", "Error creating car: {}", e);
                Err(e)
            }
        }
    }

    pub fn get_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<Car> {
        use crate::schema::cars::dsl::*;

        let car = db_handle_get_error!(
            cars.filter(id.eq(id_in)).first::<Car>(conn),
            "models/car:get_by_id",
            "car"
        );

        Ok(car)
    }

    pub fn get_by_racer(conn: &mut PgConnection, racer_id_in: i32) -> QueryResult<Vec<Car>> {
        use crate::schema::cars::dsl::*;
        cars.filter(racer_id.eq(racer_id_in)).load::<Car>(conn)
    }

    pub fn get_all(conn: &mut PgConnection) -> QueryResult<Vec<Car>> {
        use crate::schema::cars::dsl::*;
        cars.load::<Car>(conn)
    }

    /// # attach the car to a racer
    /// the racer must exist, otherwise the storage engine rejects the
    /// update with a foreign key violation.
    pub fn attach_to_racer(&self, conn: &mut PgConnection, racer_id_in: i32) -> QueryResult<Car> {
        use crate::schema::cars::dsl::*;

        diesel::update(cars.filter(id.eq(self.id)))
            .set(racer_id.eq(racer_id_in))
            .get_result(conn)
    }

    pub fn delete(&self, conn: &mut PgConnection) -> QueryResult<usize> {
        Car::delete_by_id(conn, self.id)
    }

    pub fn delete_by_id(conn: &mut PgConnection, id_in: i32) -> QueryResult<usize> {
        diesel::delete(cars::table.filter(cars::id.eq(id_in))).execute(conn)
    }

    pub fn to_new(&self) -> NewCar {
        NewCar {
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year.clone(),
            color: self.color.clone(),
            number: self.number.clone(),
            racer_id: self.racer_id,
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Car make='{}' model='{}' number='{}'>",
            self.make, self.model, self.number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_make_model_and_number() {
        let car = Car {
            id: 1,
            make: "Lola".to_string(),
            model: "T70".to_string(),
            year: "1969".to_string(),
            color: "red".to_string(),
            number: "7".to_string(),
            racer_id: None,
        };

        assert_eq!(car.to_string(), "<Car make='Lola' model='T70' number='7'>");
    }

    #[test]
    fn to_new_round_trips_all_fields() {
        let car = Car {
            id: 4,
            make: "Brabham".to_string(),
            model: "BT26".to_string(),
            year: "1968".to_string(),
            color: "green".to_string(),
            number: "12".to_string(),
            racer_id: Some(2),
        };

        let new_car = car.to_new();
        assert_eq!(new_car.make, car.make);
        assert_eq!(new_car.model, car.model);
        assert_eq!(new_car.year, car.year);
        assert_eq!(new_car.color, car.color);
        assert_eq!(new_car.number, car.number);
        assert_eq!(new_car.racer_id, car.racer_id);
    }
}
