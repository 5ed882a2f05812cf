use chrono::Utc;
use log::{debug, info};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::interface::{StoreError, TripStore};
use crate::models::{ItineraryItem, NewTrip, StoredItineraryItem, Trip};

#[derive(Debug, Default)]
struct MemoryState {
    // Newest first, the order the trip list is shown in
    trips: Vec<Trip>,
    items: HashMap<String, Vec<StoredItineraryItem>>,
}

/// Trip store kept in process memory. Used by the CLI and in tests.
#[derive(Debug, Default)]
pub struct MemoryTripStore {
    state: RwLock<MemoryState>,
}

impl MemoryTripStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of trips, listed in the given order.
    pub fn with_trips(trips: Vec<Trip>) -> Self {
        let items = trips
            .iter()
            .filter_map(|trip| trip.id.clone())
            .map(|id| (id, Vec::new()))
            .collect();

        Self {
            state: RwLock::new(MemoryState { trips, items }),
        }
    }
}

fn trip_position(trips: &[Trip], trip_id: &str) -> Option<usize> {
    trips
        .iter()
        .position(|trip| trip.id.as_deref() == Some(trip_id))
}

impl TripStore for MemoryTripStore {
    async fn list_trips(&self) -> Result<Vec<Trip>, StoreError> {
        Ok(self.state.read().await.trips.clone())
    }

    async fn create_trip(&self, trip: NewTrip) -> Result<Trip, StoreError> {
        let id = Uuid::new_v4().to_string();
        let trip = Trip::from_new(id.clone(), trip, Utc::now());

        let mut state = self.state.write().await;
        state.trips.insert(0, trip.clone());
        state.items.insert(id.clone(), Vec::new());

        info!("Created trip {}", id);
        Ok(trip)
    }

    async fn update_trip(&self, mut trip: Trip) -> Result<Trip, StoreError> {
        let trip_id = trip
            .id
            .clone()
            .ok_or_else(|| StoreError::InvalidRecord("trip id is required".to_string()))?;

        let mut state = self.state.write().await;
        let position = trip_position(&state.trips, &trip_id)
            .ok_or_else(|| StoreError::TripNotFound(trip_id.clone()))?;

        let existing = &mut state.trips[position];
        trip.created_at = existing.created_at;
        trip.updated_at = Some(Utc::now());
        *existing = trip.clone();

        debug!("Updated trip {}", trip_id);
        Ok(trip)
    }

    async fn delete_trip(&self, trip_id: &str) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let position = trip_position(&state.trips, trip_id)
            .ok_or_else(|| StoreError::TripNotFound(trip_id.to_string()))?;

        state.trips.remove(position);
        let removed_items = state.items.remove(trip_id).map_or(0, |items| items.len());

        info!("Deleted trip {} and {} itinerary items", trip_id, removed_items);
        Ok(())
    }

    async fn list_itinerary_items(
        &self,
        trip_id: &str,
    ) -> Result<Vec<StoredItineraryItem>, StoreError> {
        self.state
            .read()
            .await
            .items
            .get(trip_id)
            .cloned()
            .ok_or_else(|| StoreError::TripNotFound(trip_id.to_string()))
    }

    async fn create_itinerary_item(
        &self,
        trip_id: &str,
        item: ItineraryItem,
    ) -> Result<StoredItineraryItem, StoreError> {
        if item.day_index == 0 {
            return Err(StoreError::InvalidRecord(
                "dayIndex must be at least 1".to_string(),
            ));
        }

        let mut state = self.state.write().await;
        let items = state
            .items
            .get_mut(trip_id)
            .ok_or_else(|| StoreError::TripNotFound(trip_id.to_string()))?;

        let stored = StoredItineraryItem {
            id: Uuid::new_v4().to_string(),
            trip_id: trip_id.to_string(),
            item,
        };
        items.push(stored.clone());

        debug!("Stored itinerary item {} on trip {}", stored.id, trip_id);
        Ok(stored)
    }

    async fn update_itinerary_item(
        &self,
        trip_id: &str,
        item_id: &str,
        item: ItineraryItem,
    ) -> Result<StoredItineraryItem, StoreError> {
        if item.day_index == 0 {
            return Err(StoreError::InvalidRecord(
                "dayIndex must be at least 1".to_string(),
            ));
        }

        let mut state = self.state.write().await;
        let items = state
            .items
            .get_mut(trip_id)
            .ok_or_else(|| StoreError::TripNotFound(trip_id.to_string()))?;

        let stored = items
            .iter_mut()
            .find(|stored| stored.id == item_id)
            .ok_or_else(|| StoreError::ItemNotFound {
                trip_id: trip_id.to_string(),
                item_id: item_id.to_string(),
            })?;
        stored.item = item;

        Ok(stored.clone())
    }

    async fn delete_itinerary_item(&self, trip_id: &str, item_id: &str) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let items = state
            .items
            .get_mut(trip_id)
            .ok_or_else(|| StoreError::TripNotFound(trip_id.to_string()))?;

        let position = items
            .iter()
            .position(|stored| stored.id == item_id)
            .ok_or_else(|| StoreError::ItemNotFound {
                trip_id: trip_id.to_string(),
                item_id: item_id.to_string(),
            })?;
        items.remove(position);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityType;

    fn item(title: &str) -> ItineraryItem {
        ItineraryItem {
            day_index: 1,
            title: title.to_string(),
            description: "Activity".to_string(),
            start_time: None,
            end_time: None,
            location_name: String::new(),
            activity_type: ActivityType::Activity,
            notes: None,
        }
    }

    #[test]
    fn test_delete_trip_cascades_items() {
        tokio_test::block_on(async {
            let store = MemoryTripStore::new();
            let trip = store.create_trip(NewTrip::default()).await.unwrap();
            let trip_id = trip.id.clone().unwrap();

            store.create_itinerary_item(&trip_id, item("Museum")).await.unwrap();
            store.delete_trip(&trip_id).await.unwrap();

            assert!(store.list_trips().await.unwrap().is_empty());
            assert_eq!(
                store.list_itinerary_items(&trip_id).await,
                Err(StoreError::TripNotFound(trip_id.clone()))
            );
        });
    }

    #[test]
    fn test_rejects_day_index_zero() {
        tokio_test::block_on(async {
            let store = MemoryTripStore::new();
            let trip = store.create_trip(NewTrip::default()).await.unwrap();
            let mut bad = item("Museum");
            bad.day_index = 0;

            let result = store
                .create_itinerary_item(trip.id.as_deref().unwrap(), bad)
                .await;
            assert!(matches!(result, Err(StoreError::InvalidRecord(_))));
        });
    }
}
