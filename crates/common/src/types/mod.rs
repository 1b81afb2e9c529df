use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
    pub database: &'static str,
}

impl Health {
    pub fn new(database_up: bool) -> Self {
        Self { status: "ok", database: if database_up { "up" } else { "down" } }
    }
}
