#![forbid(unsafe_code)]
#![warn(
    unused,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Wire schema for the Hotel Sherpa Soul rooms catalog.
//!
//! The catalog service answers with a loosely typed envelope. Everything the
//! UI renders goes through [`decode_rooms_payload`], so a malformed response is
//! caught here once instead of being assumed correct by every view.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Identifier of a room as issued by the catalog service.
///
/// The service has been seen emitting both numeric and string identifiers, so
/// both are accepted and compared after coercion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoomId {
    /// Numeric identifier (`"id": 3`).
    Number(u64),
    /// Opaque string identifier (`"_id": "65f0..."`).
    Text(String),
}

impl RoomId {
    /// Whether a raw path segment refers to this room.
    ///
    /// Numeric ids match any segment that parses to the same integer (`"03"`
    /// matches `3`); string ids match the trimmed segment exactly, or the
    /// numeric value when the string itself is numeric.
    #[must_use]
    pub fn matches(&self, segment: &str) -> bool {
        let segment = segment.trim();
        match self {
            Self::Number(value) => segment.parse::<u64>().is_ok_and(|parsed| parsed == *value),
            Self::Text(value) => {
                let value = value.trim();
                if value == segment {
                    return true;
                }
                match (value.parse::<u64>(), segment.parse::<u64>()) {
                    (Ok(left), Ok(right)) => left == right,
                    _ => false,
                }
            }
        }
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value.trim()),
        }
    }
}

/// Image entry inside a catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomImage {
    /// Absolute or site-relative image URL.
    pub url: String,
}

/// Raw room record as returned by the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    /// Public identifier (`id` on the wire).
    #[serde(default)]
    pub id: Option<RoomId>,
    /// Document identifier (`_id` on the wire); used when `id` is absent.
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<RoomId>,
    /// Display name.
    pub name: String,
    /// Guest capacity.
    #[serde(default)]
    pub guests: u32,
    /// Floor area label (free text, e.g. `"35 sq ft"`).
    #[serde(default)]
    pub size: String,
    /// Bed configuration label.
    #[serde(default)]
    pub beds: String,
    /// Optional feature labels.
    #[serde(default)]
    pub features: Option<Vec<String>>,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Optional amenity labels.
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
    /// Nightly price.
    #[serde(default)]
    pub price: f64,
    /// Ordered image list; `null`, non-array values and entries without a
    /// `url` string decode to nothing.
    #[serde(default, deserialize_with = "lenient_images")]
    pub image: Vec<RoomImage>,
}

impl RoomRecord {
    /// Identifier of the record: `id` first, then `_id`.
    #[must_use]
    pub fn identifier(&self) -> Option<&RoomId> {
        self.id.as_ref().or(self.mongo_id.as_ref())
    }

    /// Normalise into a [`Room`]; `None` when the record has no identifier.
    #[must_use]
    pub fn into_room(self) -> Option<Room> {
        let id = self.id.or(self.mongo_id)?;
        Some(Room {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            guests: self.guests.max(1),
            size: self.size.trim().to_string(),
            beds: self.beds.trim().to_string(),
            price: normalise_price(self.price),
            amenities: clean_labels(self.amenities.unwrap_or_default()),
            features: clean_labels(self.features.unwrap_or_default()),
            images: self
                .image
                .into_iter()
                .map(|image| image.url.trim().to_string())
                .filter(|url| !url.is_empty())
                .collect(),
        })
    }
}

fn lenient_images<'de, D>(deserializer: D) -> Result<Vec<RoomImage>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(entries) = value else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| {
            entry.get("url").and_then(Value::as_str).map(|url| RoomImage {
                url: url.to_string(),
            })
        })
        .collect())
}

/// Catalog entry in the shape every view consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Identifier usable as a path segment.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Guest capacity, at least 1.
    pub guests: u32,
    /// Floor area label.
    pub size: String,
    /// Bed configuration label.
    pub beds: String,
    /// Nightly price, finite and non-negative.
    pub price: f64,
    /// Amenity labels in provider order.
    pub amenities: Vec<String>,
    /// Feature labels in provider order (may be empty).
    pub features: Vec<String>,
    /// Image URLs in provider order.
    pub images: Vec<String>,
}

impl Room {
    /// First image URL, or an empty string when the provider sent none.
    #[must_use]
    pub fn primary_image(&self) -> &str {
        self.images.first().map_or("", String::as_str)
    }
}

fn normalise_price(price: f64) -> f64 {
    if price.is_finite() && price > 0.0 {
        price
    } else {
        0.0
    }
}

fn clean_labels(labels: Vec<String>) -> Vec<String> {
    labels
        .into_iter()
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
        .collect()
}

/// Response envelope of the rooms endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomsEnvelope {
    /// Provider success flag.
    #[serde(default)]
    pub success: bool,
    /// Room records; kept untyped so a non-array value is not fatal.
    #[serde(default)]
    pub room: Value,
}

/// Outcome of decoding a catalog response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogPayload {
    /// Rooms that passed validation, in provider order.
    pub rooms: Vec<Room>,
    /// Number of records skipped because they did not match the schema.
    pub rejected: usize,
}

impl CatalogPayload {
    /// Payload with no rooms and no rejections.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            rooms: Vec::new(),
            rejected: 0,
        }
    }
}

/// Errors raised while decoding a catalog response body.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Body was not a JSON object.
    #[error("catalog response is not a JSON object")]
    Malformed {
        /// Underlying parse failure, when the body was not JSON at all.
        #[source]
        source: Option<serde_json::Error>,
    },
}

/// Decode and normalise a rooms endpoint body.
///
/// A missing or false `success` flag and a missing or non-array `room` field
/// both mean "no rooms available" and decode to an empty payload. Individual
/// records that do not fit [`RoomRecord`] are skipped and counted.
///
/// # Errors
///
/// Returns [`PayloadError::Malformed`] when the body is not a JSON object.
pub fn decode_rooms_payload(body: &str) -> Result<CatalogPayload, PayloadError> {
    let value: Value = serde_json::from_str(body).map_err(|err| PayloadError::Malformed {
        source: Some(err),
    })?;
    let Value::Object(mut fields) = value else {
        return Err(PayloadError::Malformed { source: None });
    };
    let envelope = RoomsEnvelope {
        success: fields
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        room: fields.remove("room").unwrap_or(Value::Null),
    };
    Ok(envelope.into_payload())
}

impl RoomsEnvelope {
    /// Validate the envelope and normalise every well-formed record.
    #[must_use]
    pub fn into_payload(self) -> CatalogPayload {
        if !self.success {
            return CatalogPayload::empty();
        }
        let Value::Array(records) = self.room else {
            return CatalogPayload::empty();
        };
        let mut payload = CatalogPayload::empty();
        for record in records {
            match serde_json::from_value::<RoomRecord>(record)
                .ok()
                .and_then(RoomRecord::into_room)
            {
                Some(room) => payload.rooms.push(room),
                None => payload.rejected += 1,
            }
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn deluxe() -> Value {
        json!({
            "id": 2,
            "name": "Deluxe Double Room",
            "guests": 2,
            "size": "35 Feets Size",
            "beds": "1 King Bed",
            "features": ["Connecting Rooms"],
            "description": "Spacious and elegant room with a king-size bed.",
            "amenities": ["Free WiFi", "Cable TV", "Work Desk", " "],
            "price": 200,
            "image": [{"url": "https://img.example/deluxe-1.jpg"}, {"url": "https://img.example/deluxe-2.jpg"}]
        })
    }

    #[test]
    fn decodes_well_formed_envelope() {
        let body = json!({ "success": true, "room": [deluxe()] }).to_string();
        let payload = decode_rooms_payload(&body).expect("payload");
        assert_eq!(payload.rejected, 0);
        let room = payload.rooms.first().expect("room");
        assert_eq!(room.id, RoomId::Number(2));
        assert_eq!(room.amenities, vec!["Free WiFi", "Cable TV", "Work Desk"]);
        assert_eq!(room.primary_image(), "https://img.example/deluxe-1.jpg");
        assert_eq!(room.images.len(), 2);
        assert!((room.price - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unsuccessful_or_non_array_envelopes_are_empty() {
        for body in [
            json!({ "success": false, "room": [deluxe()] }),
            json!({ "room": [deluxe()] }),
            json!({ "success": true, "room": { "id": 1 } }),
            json!({ "success": true }),
        ] {
            let payload = decode_rooms_payload(&body.to_string()).expect("payload");
            assert_eq!(payload, CatalogPayload::empty());
        }
    }

    #[test]
    fn non_object_bodies_are_malformed() {
        assert!(matches!(
            decode_rooms_payload("<html>502</html>"),
            Err(PayloadError::Malformed { source: Some(_) })
        ));
        assert!(matches!(
            decode_rooms_payload("[1, 2]"),
            Err(PayloadError::Malformed { source: None })
        ));
    }

    #[test]
    fn bad_records_are_skipped_and_counted() {
        let body = json!({
            "success": true,
            "room": [deluxe(), { "name": "no id" }, 42, { "_id": "abc", "name": "Suite" }]
        })
        .to_string();
        let payload = decode_rooms_payload(&body).expect("payload");
        assert_eq!(payload.rejected, 2);
        assert_eq!(payload.rooms.len(), 2);
        assert_eq!(payload.rooms[1].id, RoomId::Text("abc".into()));
    }

    #[test]
    fn records_with_both_identifiers_prefer_id() {
        let body = json!({
            "success": true,
            "room": [
                { "_id": "65f0", "id": "65f0", "name": "Suite", "guests": 2, "price": 100, "image": [{"url": "a"}] },
                { "_id": "65f1", "id": 9, "name": "Twin" },
                { "name": "Anonymous", "id": null, "_id": null }
            ]
        })
        .to_string();
        let payload = decode_rooms_payload(&body).expect("payload");
        assert_eq!(payload.rooms.len(), 2);
        assert_eq!(payload.rejected, 1);
        assert_eq!(payload.rooms[0].id, RoomId::Text("65f0".into()));
        assert_eq!(payload.rooms[1].id, RoomId::Number(9));
    }

    #[test]
    fn unusable_images_degrade_to_an_empty_list() {
        let body = json!({
            "success": true,
            "room": [
                { "id": 1, "name": "Single", "image": null },
                { "id": 2, "name": "Double", "image": [{ "alt": "no url" }, { "url": " b.jpg " }] },
                { "id": 3, "name": "Family", "image": "cover.jpg" }
            ]
        })
        .to_string();
        let payload = decode_rooms_payload(&body).expect("payload");
        assert_eq!(payload.rejected, 0);
        assert_eq!(payload.rooms.len(), 3);
        assert!(payload.rooms[0].images.is_empty());
        assert_eq!(payload.rooms[1].images, vec!["b.jpg"]);
        assert_eq!(payload.rooms[2].primary_image(), "");
    }

    #[test]
    fn normalisation_enforces_invariants() {
        let record: RoomRecord = serde_json::from_value(json!({
            "_id": "7",
            "name": " Twin Room ",
            "guests": 0,
            "price": -5.0
        }))
        .expect("record");
        let room = record.into_room().expect("room");
        assert_eq!(room.name, "Twin Room");
        assert_eq!(room.guests, 1);
        assert!(room.price.abs() < f64::EPSILON);
        assert!(room.features.is_empty());
        assert_eq!(room.primary_image(), "");
    }

    #[test]
    fn room_id_matching_coerces_numbers_and_strings() {
        assert!(RoomId::Number(3).matches("3"));
        assert!(RoomId::Number(3).matches("03"));
        assert!(!RoomId::Number(3).matches("three"));
        assert!(RoomId::Text("7".into()).matches("7"));
        assert!(RoomId::Text("7".into()).matches("007"));
        assert!(RoomId::Text("65f0a1".into()).matches("65f0a1"));
        assert!(!RoomId::Text("65f0a1".into()).matches("65F0A1"));
        assert_eq!(RoomId::Text(" abc ".into()).to_string(), "abc");
        assert_eq!(RoomId::Number(12).to_string(), "12");
    }
}
