use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::{Database, Decode, Encode};

/// Unique key of a hotel as it appears in request paths and in the `hotel` table.
#[derive(
	derive_more::From,
	derive_more::Into,
	derive_more::Deref,
	derive_more::Display,
	Serialize,
	Deserialize,
	JsonSchema,
	Debug,
	Clone,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
)]
#[serde(transparent)]
pub struct HotelId(String);

impl HotelId {
	pub fn generate() -> Self {
		Self(uuid::Uuid::new_v4().to_string())
	}
}

impl From<&str> for HotelId {
	fn from(id: &str) -> Self {
		Self(id.to_owned())
	}
}

impl<'r, Db> Decode<'r, Db> for HotelId
where
	Db: Database,
	String: Decode<'r, Db>,
{
	fn decode(value: <Db as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
		String::decode(value).map(HotelId)
	}
}

impl<'q, Db> Encode<'q, Db> for HotelId
where
	Db: Database,
	String: Encode<'q, Db>,
{
	fn encode_by_ref(&self, buffer: &mut <Db as Database>::ArgumentBuffer<'q>) -> Result<IsNull, BoxDynError> {
		self.0.encode_by_ref(buffer)
	}
}

impl<Db> sqlx::Type<Db> for HotelId
where
	Db: Database,
	String: sqlx::Type<Db>,
{
	fn type_info() -> Db::TypeInfo {
		String::type_info()
	}

	fn compatible(type_info: &Db::TypeInfo) -> bool {
		String::compatible(type_info)
	}
}
