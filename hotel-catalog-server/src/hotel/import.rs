use crate::hotel::model::NewHotel;
use crate::store::Store;
use crate::store::error::StoreError;
use std::fs::read_to_string;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ImportError {
	#[error("IO operation failed: {0}")]
	Io(#[from] std::io::Error),
	#[error("Failed to parse hotels: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("Failed to store hotel '{name}': {source}")]
	Store { name: String, source: StoreError },
}

/// Reads a JSON array of hotels with nested `roomTypes`.
pub fn read_hotels(path: impl AsRef<Path>) -> Result<Vec<NewHotel>, ImportError> {
	let text = read_to_string(path)?;

	Ok(serde_json::from_str(&text)?)
}

/// Inserts the hotels one by one and stops at the first failure. Returns the number of inserted hotels.
pub async fn import_hotels(store: &dyn Store, hotels: Vec<NewHotel>) -> Result<usize, ImportError> {
	let mut count = 0;
	for new_hotel in hotels {
		let name = new_hotel.name.clone();
		let room_type_count = new_hotel.room_types.len();
		let hotel = store
			.insert_hotel(new_hotel)
			.await
			.map_err(|source| ImportError::Store { name, source })?;

		info!(hotel_id = %hotel.id, room_type_count, "Imported hotel '{}'", hotel.name);
		count += 1;
	}

	Ok(count)
}
