pub mod hotel_id;
