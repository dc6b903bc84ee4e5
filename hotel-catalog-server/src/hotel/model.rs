use crate::types::hotel_id::HotelId;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Full hotel record, every column of the `hotel` table.
#[derive(FromRow, Serialize, JsonSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
	pub id: HotelId,
	pub name: String,
	pub description: Option<String>,
	pub address: String,
	pub city: String,
	pub country: String,
	pub star_rating: Option<i64>,
	#[schemars(with = "String")]
	pub created_at: DateTime<Utc>,
	#[schemars(with = "String")]
	pub updated_at: DateTime<Utc>,
}

/// A hotel together with its eagerly loaded room types.
///
/// `room_types` is `None` when the relation wasn't requested, which keeps `roomTypes` out of the
/// serialized record entirely.
#[derive(Serialize, JsonSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelDetail {
	#[serde(flatten)]
	pub hotel: Hotel,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub room_types: Option<Vec<ProjectedRoomType>>,
}

/// Room type reduced to the fields of a `RoomTypeSelection`.
///
/// Fields that weren't selected stay `None` and are not serialized.
#[derive(Serialize, JsonSchema, Default, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedRoomType {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hotel_id: Option<HotelId>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	// outer: selected, inner: nullable column
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<Option<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub capacity: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amenities: Option<Vec<Value>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price_per_night: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub images: Option<Vec<String>>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewHotel {
	#[serde(default)]
	pub id: Option<HotelId>,
	pub name: String,
	#[serde(default)]
	pub description: Option<String>,
	pub address: String,
	pub city: String,
	pub country: String,
	#[serde(default)]
	pub star_rating: Option<i64>,
	#[serde(default)]
	pub room_types: Vec<NewRoomType>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRoomType {
	#[serde(default)]
	pub id: Option<String>,
	pub name: String,
	#[serde(default)]
	pub description: Option<String>,
	pub capacity: i64,
	#[serde(default)]
	pub amenities: Vec<Value>,
	pub price_per_night: f64,
	#[serde(default)]
	pub images: Vec<String>,
}
