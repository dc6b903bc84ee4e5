use crate::commandline::Commandline;
use crate::error::HotelCatalogError;
use clap::Parser;

mod commandline;
mod configuration;
mod context;
mod error;
mod hotel;
mod server;
mod store;
mod types;

#[tokio::main]
async fn main() -> Result<(), HotelCatalogError> {
	Commandline::parse().run().await
}
