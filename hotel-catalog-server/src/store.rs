use crate::hotel::model::{Hotel, HotelDetail, NewHotel};
use crate::store::error::StoreError;
use crate::store::query::HotelQuery;
use async_trait::async_trait;
use static_assertions::assert_obj_safe;

pub mod error;
pub mod query;
pub mod sqlite;

#[async_trait]
pub trait Store: Send + Sync {
	/// Evaluates the query inside a single read. `Ok(None)` means no hotel has the requested key.
	async fn find_hotel(&self, query: &HotelQuery) -> Result<Option<HotelDetail>, StoreError>;
	/// Inserts the hotel and its nested room types atomically.
	async fn insert_hotel(&self, hotel: NewHotel) -> Result<Hotel, StoreError>;
}

assert_obj_safe!(Store);
