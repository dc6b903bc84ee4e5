use crate::types::hotel_id::HotelId;
use typed_builder::TypedBuilder;

/// Lookup of exactly one hotel by its unique key, optionally loading the related room types.
#[derive(TypedBuilder, Clone, Debug, PartialEq, Eq)]
pub struct HotelQuery {
	#[builder(setter(into))]
	pub hotel_id: HotelId,
	/// Eagerly loaded `roomTypes` relation, projected to the selected fields.
	#[builder(default, setter(strip_option))]
	pub room_types: Option<RoomTypeSelection>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoomTypeField {
	Id,
	HotelId,
	Name,
	Description,
	Capacity,
	Amenities,
	PricePerNight,
	Images,
}

impl RoomTypeField {
	pub fn column(self) -> &'static str {
		match self {
			Self::Id => "id",
			Self::HotelId => "hotel_id",
			Self::Name => "name",
			Self::Description => "description",
			Self::Capacity => "capacity",
			Self::Amenities => "amenities",
			Self::PricePerNight => "price_per_night",
			Self::Images => "images",
		}
	}
}

/// Ordered allow-list of room type fields. Duplicates are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomTypeSelection {
	fields: Vec<RoomTypeField>,
}

impl RoomTypeSelection {
	/// The projection shown to visitors looking at a hotel.
	pub fn detail() -> Self {
		use RoomTypeField::*;
		[Id, Name, Amenities, PricePerNight, Images].into_iter().collect()
	}

	pub fn fields(&self) -> &[RoomTypeField] {
		&self.fields
	}

	/// Column list for a `SELECT`. An empty selection still needs a column, so it reads the `rowid`.
	pub fn columns(&self) -> String {
		if self.fields.is_empty() {
			return "rowid".to_owned();
		}

		self.fields
			.iter()
			.map(|field| field.column())
			.collect::<Vec<_>>()
			.join(", ")
	}
}

impl FromIterator<RoomTypeField> for RoomTypeSelection {
	fn from_iter<Fields: IntoIterator<Item = RoomTypeField>>(iterator: Fields) -> Self {
		let mut fields = Vec::new();
		for field in iterator {
			if !fields.contains(&field) {
				fields.push(field);
			}
		}

		Self { fields }
	}
}
