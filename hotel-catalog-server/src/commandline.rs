use crate::configuration::Configuration;
use crate::context::ApplicationContext;
use crate::error::HotelCatalogError;
use crate::hotel::import::{import_hotels, read_hotels};
use crate::server::run_server;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
pub struct Commandline {
	#[arg(short = 'c', long = "config-file", default_value = "configuration.toml")]
	pub configuration_file_path: String,
	#[command(subcommand)]
	pub command: Option<BaseCommand>,
}

#[derive(clap::Subcommand, Default)]
pub enum BaseCommand {
	/// Run the hotel catalog server
	#[default]
	Run,
	/// Print the configuration
	Configuration,
	/// Import hotels with their room types from a JSON file
	Import {
		/// JSON array of hotels, each with an optional `roomTypes` array
		file: PathBuf,
	},
}

impl Commandline {
	pub async fn run(self) -> Result<(), HotelCatalogError> {
		let configuration = Configuration::from_file(&self.configuration_file_path)?;

		tracing_subscriber::fmt()
			.with_env_filter(EnvFilter::new(&configuration.log_filters))
			.init();

		let base_command = self.command.unwrap_or_default();
		match base_command {
			BaseCommand::Run => {
				let application_context = ApplicationContext::new(configuration).await?;
				info!(
					"Starting server. Hotel details are served at 'http://{}/api/hotels/{{hotel_id}}'.",
					application_context.configuration.address
				);
				run_server(application_context).await?;
			}
			BaseCommand::Configuration => println!("{configuration:#?}"),
			BaseCommand::Import { file } => {
				let hotels = read_hotels(&file)?;
				let application_context = ApplicationContext::new(configuration).await?;
				let count = import_hotels(application_context.store.as_ref(), hotels).await?;
				info!("Imported {count} hotels from '{}'.", file.display());
			}
		}
		Ok(())
	}
}
