use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Deserializer, Serialize};

/// A class offering as stored in the instructors collection.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Course {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_price: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub available_seats: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub enrolled_students: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_img: Option<String>,
}

/// Counts were stored from client JSON as-is, so a document may carry them as
/// doubles or numeric strings. Anything unreadable becomes `None` rather than
/// failing the whole listing.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(i64),
        Float(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let count = match Option::<Count>::deserialize(deserializer)? {
        Some(Count::Int(n)) => Some(n),
        Some(Count::Float(f)) => whole(f),
        Some(Count::Text(s)) => s.trim().parse::<f64>().ok().and_then(whole),
        Some(Count::Other(_)) | None => None,
    };
    Ok(count)
}

fn whole(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.round() as i64)
}

impl Course {
    /// Fields returned when a single course card is loaded.
    pub fn card_projection() -> Document {
        doc! {
            "course_price": 1,
            "teacher": 1,
            "available_seats": 1,
            "enrolled_students": 1,
            "image_url": 1,
            "title": 1,
            "description": 1,
            "course_img": 1,
            "_id": 1,
        }
    }
}
