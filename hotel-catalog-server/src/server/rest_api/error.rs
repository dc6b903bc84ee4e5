use aide::OperationOutput;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schemars::JsonSchema;
use serde::Serialize;

const INVALID_HOTEL_ID_MESSAGE: &str = "Invalid hotel id";
const HOTEL_NOT_FOUND_MESSAGE: &str = "Hotel Does not Exist";
const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// Error body shared by all routes: `{"error": "<message>"}`.
///
/// The message is fixed per failure kind, internal error details never end up in here.
#[derive(Serialize, JsonSchema, Debug)]
pub struct ApiErrorResponse {
	#[serde(skip)]
	status: StatusCode,
	error: &'static str,
}

impl ApiErrorResponse {
	pub fn invalid_hotel_id() -> Self {
		Self {
			status: StatusCode::BAD_REQUEST,
			error: INVALID_HOTEL_ID_MESSAGE,
		}
	}

	pub fn hotel_not_found() -> Self {
		Self {
			status: StatusCode::NOT_FOUND,
			error: HOTEL_NOT_FOUND_MESSAGE,
		}
	}

	pub fn internal_server_error() -> Self {
		Self {
			status: StatusCode::INTERNAL_SERVER_ERROR,
			error: INTERNAL_SERVER_ERROR_MESSAGE,
		}
	}
}

impl IntoResponse for ApiErrorResponse {
	fn into_response(self) -> Response {
		(self.status, Json(self)).into_response()
	}
}

// Status codes depend on the failure, so routes document their error responses themselves.
impl OperationOutput for ApiErrorResponse {
	type Inner = Self;
}
