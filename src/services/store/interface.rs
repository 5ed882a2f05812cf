use thiserror::Error;

use crate::models::{ItineraryItem, NewTrip, StoredItineraryItem, Trip};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("trip not found: {0}")]
    TripNotFound(String),
    #[error("itinerary item {item_id} not found on trip {trip_id}")]
    ItemNotFound { trip_id: String, item_id: String },
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence for trips and their itinerary items.
///
/// Each call stands alone; nothing spans several calls, so a caller creating
/// items one by one can be left with only some of them stored.
#[allow(async_fn_in_trait)]
pub trait TripStore {
    async fn list_trips(&self) -> Result<Vec<Trip>, StoreError>;
    async fn create_trip(&self, trip: NewTrip) -> Result<Trip, StoreError>;
    async fn update_trip(&self, trip: Trip) -> Result<Trip, StoreError>;
    /// Removes the trip together with all of its itinerary items.
    async fn delete_trip(&self, trip_id: &str) -> Result<(), StoreError>;

    async fn list_itinerary_items(
        &self,
        trip_id: &str,
    ) -> Result<Vec<StoredItineraryItem>, StoreError>;
    async fn create_itinerary_item(
        &self,
        trip_id: &str,
        item: ItineraryItem,
    ) -> Result<StoredItineraryItem, StoreError>;
    async fn update_itinerary_item(
        &self,
        trip_id: &str,
        item_id: &str,
        item: ItineraryItem,
    ) -> Result<StoredItineraryItem, StoreError>;
    async fn delete_itinerary_item(&self, trip_id: &str, item_id: &str) -> Result<(), StoreError>;
}
