use crate::hotel::model::{Hotel, HotelDetail, NewHotel, NewRoomType, ProjectedRoomType};
use crate::store::Store;
use crate::store::error::{IntoStoreResult, StoreError};
use crate::store::query::{HotelQuery, RoomTypeField, RoomTypeSelection};
use crate::types::hotel_id::HotelId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::sqlite::SqliteRow;
use sqlx::types::Json;
use sqlx::{Row, SqliteConnection, SqlitePool, migrate, query, query_as};

const HOTEL_COLUMNS: &str = "id, name, description, address, city, country, star_rating, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteStore {
	pool: SqlitePool,
}

impl SqliteStore {
	pub async fn new(database_url: &str) -> Result<Self, StoreError> {
		let pool = SqlitePool::connect(database_url)
			.await
			.connection_error("Failed to connect to database")?;
		let store = Self { pool };
		store.migrate().await?;

		Ok(store)
	}

	async fn migrate(&self) -> Result<(), StoreError> {
		migrate!().run(&self.pool).await.map_err(Into::into)
	}

	#[cfg(test)]
	pub async fn close(&self) {
		self.pool.close().await;
	}
}

#[async_trait]
impl Store for SqliteStore {
	async fn find_hotel(&self, hotel_query: &HotelQuery) -> Result<Option<HotelDetail>, StoreError> {
		let mut transaction = self.pool.begin().await?;

		let hotel: Option<Hotel> = query_as(&format!("SELECT {HOTEL_COLUMNS} FROM hotel WHERE id = ?1"))
			.bind(&hotel_query.hotel_id)
			.fetch_optional(&mut *transaction)
			.await?;
		let Some(hotel) = hotel else {
			transaction.commit().await?;
			return Ok(None);
		};

		let room_types = match &hotel_query.room_types {
			Some(selection) => Some(select_room_types(&mut transaction, &hotel.id, selection).await?),
			None => None,
		};
		transaction.commit().await?;

		Ok(Some(HotelDetail { hotel, room_types }))
	}

	async fn insert_hotel(
		&self,
		NewHotel {
			id,
			name,
			description,
			address,
			city,
			country,
			star_rating,
			room_types,
		}: NewHotel,
	) -> Result<Hotel, StoreError> {
		let id = id.unwrap_or_else(HotelId::generate);
		let now = Utc::now();

		let mut transaction = self.pool.begin().await?;
		let hotel: Hotel = query_as(&format!(
			r"INSERT INTO hotel (id, name, description, address, city, country, star_rating, created_at, updated_at)
			VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
			RETURNING {HOTEL_COLUMNS}"
		))
		.bind(id)
		.bind(name)
		.bind(description)
		.bind(address)
		.bind(city)
		.bind(country)
		.bind(star_rating)
		.bind(now)
		.fetch_one(&mut *transaction)
		.await?;

		for room_type in room_types {
			insert_room_type(&mut transaction, &hotel.id, room_type, now).await?;
		}
		transaction.commit().await?;

		Ok(hotel)
	}
}

async fn select_room_types(
	connection: &mut SqliteConnection,
	hotel_id: &HotelId,
	selection: &RoomTypeSelection,
) -> Result<Vec<ProjectedRoomType>, StoreError> {
	// columns come from a closed set of names, never from input
	let sql = format!(
		"SELECT {} FROM room_type WHERE hotel_id = ?1 ORDER BY rowid",
		selection.columns()
	);

	let rows = query(&sql).bind(hotel_id).fetch_all(&mut *connection).await?;
	rows.iter()
		.map(|row| project_room_type(row, selection).map_err(StoreError::from))
		.collect()
}

fn project_room_type(row: &SqliteRow, selection: &RoomTypeSelection) -> Result<ProjectedRoomType, sqlx::Error> {
	let mut room_type = ProjectedRoomType::default();
	for &field in selection.fields() {
		let column = field.column();
		match field {
			RoomTypeField::Id => room_type.id = Some(row.try_get(column)?),
			RoomTypeField::HotelId => room_type.hotel_id = Some(row.try_get(column)?),
			RoomTypeField::Name => room_type.name = Some(row.try_get(column)?),
			RoomTypeField::Description => room_type.description = Some(row.try_get(column)?),
			RoomTypeField::Capacity => room_type.capacity = Some(row.try_get(column)?),
			RoomTypeField::Amenities => {
				let Json(amenities) = row.try_get::<Json<Vec<Value>>, _>(column)?;
				room_type.amenities = Some(amenities);
			}
			RoomTypeField::PricePerNight => room_type.price_per_night = Some(row.try_get(column)?),
			RoomTypeField::Images => {
				let Json(images) = row.try_get::<Json<Vec<String>>, _>(column)?;
				room_type.images = Some(images);
			}
		}
	}

	Ok(room_type)
}

async fn insert_room_type(
	connection: &mut SqliteConnection,
	hotel_id: &HotelId,
	NewRoomType {
		id,
		name,
		description,
		capacity,
		amenities,
		price_per_night,
		images,
	}: NewRoomType,
	created_at: DateTime<Utc>,
) -> Result<(), StoreError> {
	let id = id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

	query(
		r"INSERT INTO room_type (id, hotel_id, name, description, capacity, amenities, price_per_night, images, created_at)
		VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
	)
	.bind(id)
	.bind(hotel_id)
	.bind(name)
	.bind(description)
	.bind(capacity)
	.bind(Json(amenities))
	.bind(price_per_night)
	.bind(Json(images))
	.bind(created_at)
	.execute(&mut *connection)
	.await?;

	Ok(())
}
