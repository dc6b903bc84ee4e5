use crate::server_tests::start_test_server;
use crate::store::test_utils::{FAILURE_DETAIL, FailingStore, PanickingStore, seeded_store};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

#[tokio::test]
async fn should_return_hotel_with_projected_room_types() {
	let http_client = start_test_server(seeded_store().await).await;

	let response = http_client.get("/api/hotels/h1").send().await.expect("Request failed.");

	assert_eq!(StatusCode::OK, response.status());
	let body = response.json::<Value>().await.expect("Failed to parse hotel JSON");
	assert_eq!("h1", body["id"]);
	assert_eq!("Harbour View", body["name"]);
	assert_eq!("Rooms above the old port.", body["description"]);
	assert_eq!("1 Quay Street", body["address"]);
	assert_eq!("Lisbon", body["city"]);
	assert_eq!("Portugal", body["country"]);
	assert_eq!(4, body["starRating"]);
	assert!(body["createdAt"].is_string());
	assert!(body["updatedAt"].is_string());

	let room_types = body["roomTypes"].as_array().expect("roomTypes is not an array");
	assert_eq!(
		&vec![
			json!({
				"id": "rt-double",
				"name": "Double",
				"amenities": ["wifi", "air conditioning"],
				"pricePerNight": 120.0,
				"images": ["double-1.jpg", "double-2.jpg"],
			}),
			json!({
				"id": "rt-suite",
				"name": "Suite",
				"amenities": ["wifi", {"name": "minibar", "complimentary": false}],
				"pricePerNight": 310.5,
				"images": [],
			}),
		],
		room_types
	);
}

#[tokio::test]
async fn should_return_every_room_type_with_exactly_the_visitor_fields() {
	let http_client = start_test_server(seeded_store().await).await;

	let body = http_client
		.get("/api/hotels/h1")
		.send()
		.await
		.expect("Request failed.")
		.json::<Value>()
		.await
		.expect("Failed to parse hotel JSON");

	let room_types = body["roomTypes"].as_array().expect("roomTypes is not an array");
	assert_eq!(2, room_types.len());
	for room_type in room_types {
		let mut fields = room_type
			.as_object()
			.expect("Room type is not an object")
			.keys()
			.map(String::as_str)
			.collect::<Vec<_>>();
		fields.sort_unstable();
		assert_eq!(vec!["amenities", "id", "images", "name", "pricePerNight"], fields);
	}
}

#[tokio::test]
async fn should_return_empty_room_types_for_hotel_without_rooms() {
	let http_client = start_test_server(seeded_store().await).await;

	let response = http_client.get("/api/hotels/h2").send().await.expect("Request failed.");

	assert_eq!(StatusCode::OK, response.status());
	let body = response.json::<Value>().await.expect("Failed to parse hotel JSON");
	assert_eq!("Mountain Lodge", body["name"]);
	assert_eq!(Value::Null, body["description"]);
	assert_eq!(json!([]), body["roomTypes"]);
}

#[tokio::test]
async fn should_return_not_found_for_missing_hotel() {
	let http_client = start_test_server(seeded_store().await).await;

	let response = http_client
		.get("/api/hotels/missing")
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::NOT_FOUND, response.status());
	let body = response.json::<Value>().await.expect("Failed to parse error JSON");
	assert_eq!(json!({"error": "Hotel Does not Exist"}), body);
}

#[tokio::test]
async fn should_return_json_bad_request_for_undecodable_hotel_id() {
	let http_client = start_test_server(seeded_store().await).await;

	let response = http_client.get("/api/hotels/%FF").send().await.expect("Request failed.");

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
	let body = response.json::<Value>().await.expect("Failed to parse error JSON");
	assert_eq!(json!({"error": "Invalid hotel id"}), body);
}

#[tokio::test]
async fn should_return_internal_server_error_when_store_fails() {
	let http_client = start_test_server(std::sync::Arc::new(FailingStore)).await;

	let response = http_client.get("/api/hotels/h1").send().await.expect("Request failed.");

	assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
	let text = response.text().await.expect("Failed to read response body");
	assert!(!text.contains(FAILURE_DETAIL), "Error detail leaked to client: {text}");
	let body = serde_json::from_str::<Value>(&text).expect("Failed to parse error JSON");
	assert_eq!(json!({"error": "Internal server error"}), body);
}

#[tokio::test]
async fn should_return_internal_server_error_when_handler_panics() {
	let http_client = start_test_server(std::sync::Arc::new(PanickingStore)).await;

	let response = http_client.get("/api/hotels/h1").send().await.expect("Request failed.");

	assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
	let text = response.text().await.expect("Failed to read response body");
	assert!(!text.contains(FAILURE_DETAIL), "Panic message leaked to client: {text}");
	let body = serde_json::from_str::<Value>(&text).expect("Failed to parse error JSON");
	assert_eq!(json!({"error": "Internal server error"}), body);
}

#[tokio::test]
async fn should_return_identical_bodies_for_repeated_requests() {
	let http_client = start_test_server(seeded_store().await).await;

	let mut bodies = Vec::new();
	for _ in 0..3 {
		let response = http_client.get("/api/hotels/h1").send().await.expect("Request failed.");
		assert_eq!(StatusCode::OK, response.status());
		bodies.push(response.bytes().await.expect("Failed to read response body"));
	}

	assert_eq!(bodies[0], bodies[1]);
	assert_eq!(bodies[1], bodies[2]);
}

#[tokio::test]
async fn should_provide_openapi_json() {
	let http_client = start_test_server(seeded_store().await).await;
	let response = http_client
		.get("/api/openapi.json")
		.send()
		.await
		.expect("Request failed.");

	#[derive(Deserialize)]
	struct OpenApi {
		openapi: String,
		paths: Value,
	}
	assert_eq!(StatusCode::OK, response.status());
	let specification = response
		.json::<OpenApi>()
		.await
		.expect("Failed to deserialize OpenAPI specification from JSON");

	assert!(specification.openapi.starts_with("3."));
	let hotel_route = &specification.paths["/api/hotels/{hotel_id}"]["get"];
	assert!(hotel_route.is_object(), "Hotel route missing from OpenAPI paths");
	for status in ["200", "400", "404", "500"] {
		assert!(
			hotel_route["responses"][status].is_object(),
			"Response {status} isn't documented"
		);
	}
}
