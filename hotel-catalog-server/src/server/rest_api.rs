use crate::context::ApplicationContext;
use aide::axum::ApiRouter;
use aide::axum::routing::get_with;

mod error;
mod hotel;

pub use error::ApiErrorResponse;

pub fn rest_api() -> ApiRouter<ApplicationContext> {
	ApiRouter::new().api_route(
		"/hotels/{hotel_id}",
		get_with(hotel::hotel_detail, hotel::hotel_detail_docs),
	)
}
