use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::lenient;

/// Catalog entry as shown in rocket listings.
///
/// The image list is stored under `rocket_images`, the same key the
/// session-storage writer uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    pub id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub description: String,
    #[serde(rename = "rocket_images", default, deserialize_with = "lenient::or_default")]
    pub images: Vec<String>,
}

impl Rocket {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            images: Vec::new(),
        }
    }
}

/// A rocket with its launch facts.
///
/// Entries read back from session storage may carry only the listing fields,
/// so every launch fact is optional. A launch fact of the wrong type reads as
/// absent rather than rejecting the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocketDetail {
    #[serde(flatten)]
    pub rocket: Rocket,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub cost_per_launch: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub country: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_flight: Option<String>,
}

impl RocketDetail {
    pub fn id(&self) -> &str {
        &self.rocket.id
    }

    /// Parse `first_flight` as a calendar date (`YYYY-MM-DD`).
    pub fn first_flight_date(&self) -> Option<NaiveDate> {
        self.first_flight
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
    }

    pub fn into_rocket(self) -> Rocket {
        self.rocket
    }
}

impl From<Rocket> for RocketDetail {
    fn from(rocket: Rocket) -> Self {
        Self {
            rocket,
            cost_per_launch: None,
            country: None,
            first_flight: None,
        }
    }
}

impl From<RocketDetail> for Rocket {
    fn from(detail: RocketDetail) -> Self {
        detail.rocket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_use_rocket_images_key() {
        let mut rocket = Rocket::new("r1", "Falcon 1");
        rocket.images.push("https://img/1.jpg".into());

        let json = serde_json::to_value(&rocket).unwrap();
        assert_eq!(json["rocket_images"][0], "https://img/1.jpg");
        assert!(json.get("images").is_none());
    }

    #[test]
    fn detail_flattens_listing_fields() {
        let detail: RocketDetail = serde_json::from_str(
            r#"{"id":"r1","name":"Falcon 9","description":"","rocket_images":[],
                "cost_per_launch":50000000,"country":"United States","first_flight":"2010-06-04"}"#,
        )
        .unwrap();

        assert_eq!(detail.id(), "r1");
        assert_eq!(detail.rocket.name, "Falcon 9");
        assert_eq!(detail.cost_per_launch, Some(50_000_000.0));
        assert_eq!(detail.country.as_deref(), Some("United States"));
    }

    #[test]
    fn detail_fields_are_optional() {
        let detail: RocketDetail = serde_json::from_str(r#"{"id":"local-1","name":"Mine"}"#).unwrap();

        assert_eq!(detail.cost_per_launch, None);
        assert_eq!(detail.country, None);
        assert!(detail.rocket.images.is_empty());

        // Absent launch facts are not written back out
        let json = serde_json::to_value(&detail).unwrap();
        assert!(json.get("country").is_none());
    }

    #[test]
    fn wrong_typed_fields_keep_the_entry() {
        let detail: RocketDetail = serde_json::from_str(
            r#"{"id":"mine","name":"Mine","description":null,"rocket_images":"a.png",
                "cost_per_launch":"1200","country":42,"first_flight":null}"#,
        )
        .unwrap();

        assert_eq!(detail.id(), "mine");
        assert_eq!(detail.rocket.name, "Mine");
        assert_eq!(detail.rocket.description, "");
        assert!(detail.rocket.images.is_empty());
        assert_eq!(detail.cost_per_launch, Some(1200.0));
        assert_eq!(detail.country, None);
        assert_eq!(detail.first_flight, None);
    }

    #[test]
    fn id_stays_required() {
        assert!(serde_json::from_str::<RocketDetail>(r#"{"id":null,"name":"x"}"#).is_err());
        assert!(serde_json::from_str::<RocketDetail>(r#"{"name":"x"}"#).is_err());
    }

    #[test]
    fn first_flight_date_parses_iso_dates() {
        let mut detail = RocketDetail::from(Rocket::new("r1", "Starship"));
        assert_eq!(detail.first_flight_date(), None);

        detail.first_flight = Some("2006-03-24".into());
        assert_eq!(
            detail.first_flight_date(),
            NaiveDate::from_ymd_opt(2006, 3, 24)
        );

        detail.first_flight = Some("soon".into());
        assert_eq!(detail.first_flight_date(), None);
    }
}
