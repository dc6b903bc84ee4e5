use crate::hotel::detail::{HotelDetailFetcher, HotelDetailOutcome};
use crate::hotel::model::HotelDetail;
use crate::server::rest_api::error::ApiErrorResponse;
use crate::types::hotel_id::HotelId;
use aide::OperationOutput;
use aide::transform::TransformOperation;
use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, error};

#[derive(Deserialize, JsonSchema)]
pub struct HotelPath {
	/// Unique key of the hotel.
	pub hotel_id: HotelId,
}

pub async fn hotel_detail(
	State(fetcher): State<HotelDetailFetcher>,
	path: Result<Path<HotelPath>, PathRejection>,
) -> Result<HotelDetailOutcome, ApiErrorResponse> {
	let Path(HotelPath { hotel_id }) = path.map_err(|rejection| {
		debug!(%rejection, "Rejected hotel path");
		ApiErrorResponse::invalid_hotel_id()
	})?;

	Ok(fetcher.fetch(hotel_id).await)
}

pub fn hotel_detail_docs(operation: TransformOperation) -> TransformOperation {
	operation
		.summary("Hotel detail")
		.description("The hotel record together with its room types, amenities and pricing.")
		.tag("hotels")
		.response::<200, Json<HotelDetail>>()
		.response::<400, Json<ApiErrorResponse>>()
		.response::<404, Json<ApiErrorResponse>>()
		.response::<500, Json<ApiErrorResponse>>()
}

impl IntoResponse for HotelDetailOutcome {
	fn into_response(self) -> Response {
		use HotelDetailOutcome::*;
		match self {
			Success(hotel) => match serde_json::to_vec(&hotel) {
				Ok(body) => (
					StatusCode::OK,
					[(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
					body,
				)
					.into_response(),
				Err(error) => {
					error!(hotel_id = %hotel.hotel.id, ?error, "Failed to serialize hotel detail");
					ApiErrorResponse::internal_server_error().into_response()
				}
			},
			NotFound => ApiErrorResponse::hotel_not_found().into_response(),
			InternalError => ApiErrorResponse::internal_server_error().into_response(),
		}
	}
}

// Responses are documented explicitly in `hotel_detail_docs`.
impl OperationOutput for HotelDetailOutcome {
	type Inner = HotelDetail;
}
