use crate::context::ApplicationContext;
use crate::server::rest_api::ApiErrorResponse;
use aide::axum::ApiRouter;
use aide::openapi::{Info, OpenApi};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

mod rest_api;

pub async fn run_server(application_context: ApplicationContext) -> std::io::Result<()> {
	let address = application_context.configuration.address;
	let router = create_router(application_context);

	axum_server::bind(address).serve(router.into_make_service()).await
}

pub fn create_router(application_context: ApplicationContext) -> Router {
	let mut api = OpenApi {
		info: Info {
			title: "hotel-catalog".to_owned(),
			version: env!("CARGO_PKG_VERSION").to_owned(),
			..Info::default()
		},
		..OpenApi::default()
	};

	ApiRouter::new()
		.nest("/api", rest_api::rest_api())
		.finish_api(&mut api)
		.route("/api/openapi.json", get(openapi_json))
		.layer(Extension(Arc::new(api)))
		.layer(CatchPanicLayer::custom(handle_panic))
		.layer(TraceLayer::new_for_http())
		.with_state(application_context)
}

async fn openapi_json(Extension(api): Extension<Arc<OpenApi>>) -> Response {
	Json(api.as_ref()).into_response()
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
	let message = panic
		.downcast_ref::<String>()
		.map(String::as_str)
		.or_else(|| panic.downcast_ref::<&str>().copied())
		.unwrap_or("unknown panic payload");
	error!(panic = message, "Request handler panicked");

	ApiErrorResponse::internal_server_error().into_response()
}
