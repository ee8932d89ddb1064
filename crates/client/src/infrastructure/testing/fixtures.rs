//! Simple test fixtures used across unit tests.

use kartsim_domain::{Character, CharacterId, Power};
use serde_json::{json, Value};

use crate::ports::outbound::ApiError;

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

pub fn character(id: u32, name: &str, power: u8) -> Character {
    Character::new(
        CharacterId::new(id),
        name,
        format!("/img/{}.png", name.to_lowercase()),
        Power::new(power).unwrap_or(Power::ZERO),
    )
}

/// The six-racer demo roster as the static document serves it
pub fn roster_document() -> Value {
    json!([
        { "id": 1, "name": "Peach", "imageUrl": "/img/peach.png", "power": 40 },
        { "id": 2, "name": "Mario", "imageUrl": "/img/mario.png", "power": 50 },
        { "id": 3, "name": "Luigi", "imageUrl": "/img/luigi.png", "power": 50 },
        { "id": 4, "name": "Yoshi", "imageUrl": "/img/yoshi.png", "power": 30 },
        { "id": 5, "name": "Bowser", "imageUrl": "/img/bowser.png", "power": 70 },
        { "id": 6, "name": "Toad", "imageUrl": "/img/toad.png", "power": 100 }
    ])
}

/// Two users shaped like the placeholder API's payload
pub fn users_document() -> Value {
    json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "website": "hildegard.org"
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "website": "anastasia.net"
        }
    ])
}
