use serde::{Deserialize, Serialize};

use super::lenient;
use super::rocket::{Rocket, RocketDetail};

/// Rocket record as returned by the `/v4/rockets` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteRocket {
    pub id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub flickr_images: Vec<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub cost_per_launch: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub first_flight: Option<String>,
}

impl RemoteRocket {
    /// Project onto the listing shape. `flickr_images` becomes `images`.
    pub fn into_rocket(self) -> Rocket {
        Rocket {
            id: self.id,
            name: self.name,
            description: self.description,
            images: self.flickr_images,
        }
    }

    pub fn into_detail(self) -> RocketDetail {
        RocketDetail {
            rocket: Rocket {
                id: self.id,
                name: self.name,
                description: self.description,
                images: self.flickr_images,
            },
            cost_per_launch: self.cost_per_launch,
            country: self.country,
            first_flight: self.first_flight,
        }
    }
}
