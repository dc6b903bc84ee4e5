use crate::hotel::model::HotelDetail;
use crate::store::Store;
use crate::store::query::{HotelQuery, RoomTypeSelection};
use crate::types::hotel_id::HotelId;
use std::sync::Arc;
use tracing::{debug, error};

/// Result of fetching a hotel detail. The REST layer maps each variant to a fixed status and body.
#[derive(Debug, PartialEq)]
pub enum HotelDetailOutcome {
	Success(HotelDetail),
	NotFound,
	/// The cause has already been logged and is intentionally not carried along.
	InternalError,
}

#[derive(Clone)]
pub struct HotelDetailFetcher {
	store: Arc<dyn Store>,
}

impl HotelDetailFetcher {
	pub fn new(store: Arc<dyn Store>) -> Self {
		Self { store }
	}

	/// Loads the full hotel record with its room types projected to the visitor fields.
	pub async fn fetch(&self, hotel_id: HotelId) -> HotelDetailOutcome {
		let query = HotelQuery::builder()
			.hotel_id(hotel_id.clone())
			.room_types(RoomTypeSelection::detail())
			.build();

		match self.store.find_hotel(&query).await {
			Ok(Some(hotel)) => {
				debug!(%hotel_id, ?hotel, "Fetched hotel detail");
				HotelDetailOutcome::Success(hotel)
			}
			Ok(None) => {
				debug!(%hotel_id, "Hotel does not exist");
				HotelDetailOutcome::NotFound
			}
			Err(error) => {
				error!(%hotel_id, ?error, "Failed to fetch hotel detail");
				HotelDetailOutcome::InternalError
			}
		}
	}
}
