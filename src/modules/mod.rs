pub mod models {
    pub mod best_lap;
    pub mod car;
    pub mod event;
    pub mod race;
    pub mod race_class;
    pub mod racer;
    pub mod record;
    pub mod sponsor;
    pub mod track;
    pub mod user;

    pub mod general;
}

pub mod helpers {
    pub mod logging;
    pub mod password;
}
