use crate::configuration::ConfigurationError;
use crate::hotel::import::ImportError;
use crate::store::error::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotelCatalogError {
	#[error("Failed to load configuration: {0}")]
	Configuration(#[from] ConfigurationError),
	#[error("Failed to open store: {0}")]
	Store(#[from] StoreError),
	#[error("Failed to import hotels: {0}")]
	Import(#[from] ImportError),
	#[error("IO error while serving requests: {0}")]
	Server(#[from] std::io::Error),
}
