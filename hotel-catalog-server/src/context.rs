use crate::configuration::Configuration;
use crate::hotel::detail::HotelDetailFetcher;
use crate::store::Store;
use crate::store::error::StoreError;
use crate::store::sqlite::SqliteStore;
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationContext {
	pub configuration: Configuration,
	pub store: Arc<dyn Store>,
	pub hotel_detail_fetcher: HotelDetailFetcher,
}

impl ApplicationContext {
	pub async fn new(configuration: Configuration) -> Result<ApplicationContext, StoreError> {
		let store = Arc::new(SqliteStore::new(&configuration.database_url).await?);

		Ok(Self::with_store(configuration, store))
	}

	pub fn with_store(configuration: Configuration, store: Arc<dyn Store>) -> ApplicationContext {
		let hotel_detail_fetcher = HotelDetailFetcher::new(Arc::clone(&store));

		Self {
			configuration,
			store,
			hotel_detail_fetcher,
		}
	}
}
