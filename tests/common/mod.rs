#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use serde_json::json;
use smarttrip_planner::models::{
    ActivityEntry, CarRentalData, Flight, FlightData, ItineraryItem, LodgingEntry, NewTrip,
    NewTripRequest, StoredItineraryItem, Trip,
};
use smarttrip_planner::services::{MemoryTripStore, StoreError, TripPlanner, TripStore};

/// Memory store that can be told to fail, to exercise the planner's error paths.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryTripStore,
    // Number of itinerary items accepted before creation starts failing
    item_budget: Option<usize>,
    items_created: AtomicUsize,
    fail_trip_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl FlakyStore {
    pub fn failing_after_items(budget: usize) -> Self {
        Self {
            item_budget: Some(budget),
            ..Self::default()
        }
    }

    pub fn failing_trip_writes() -> Self {
        let store = Self::default();
        store.fail_trip_writes.store(true, Ordering::SeqCst);
        store
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    fn unavailable() -> StoreError {
        StoreError::Unavailable("connection reset".to_string())
    }

    fn check_trip_writes(&self) -> Result<(), StoreError> {
        if self.fail_trip_writes.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        Ok(())
    }

    fn check_reads(&self) -> Result<(), StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        Ok(())
    }
}

impl TripStore for FlakyStore {
    async fn list_trips(&self) -> Result<Vec<Trip>, StoreError> {
        self.check_reads()?;
        self.inner.list_trips().await
    }

    async fn create_trip(&self, trip: NewTrip) -> Result<Trip, StoreError> {
        self.check_trip_writes()?;
        self.inner.create_trip(trip).await
    }

    async fn update_trip(&self, trip: Trip) -> Result<Trip, StoreError> {
        self.check_trip_writes()?;
        self.inner.update_trip(trip).await
    }

    async fn delete_trip(&self, trip_id: &str) -> Result<(), StoreError> {
        self.check_trip_writes()?;
        self.inner.delete_trip(trip_id).await
    }

    async fn list_itinerary_items(
        &self,
        trip_id: &str,
    ) -> Result<Vec<StoredItineraryItem>, StoreError> {
        self.check_reads()?;
        self.inner.list_itinerary_items(trip_id).await
    }

    async fn create_itinerary_item(
        &self,
        trip_id: &str,
        item: ItineraryItem,
    ) -> Result<StoredItineraryItem, StoreError> {
        if let Some(budget) = self.item_budget {
            if self.items_created.load(Ordering::SeqCst) >= budget {
                return Err(Self::unavailable());
            }
        }
        let stored = self.inner.create_itinerary_item(trip_id, item).await?;
        self.items_created.fetch_add(1, Ordering::SeqCst);
        Ok(stored)
    }

    async fn update_itinerary_item(
        &self,
        trip_id: &str,
        item_id: &str,
        item: ItineraryItem,
    ) -> Result<StoredItineraryItem, StoreError> {
        self.inner.update_itinerary_item(trip_id, item_id, item).await
    }

    async fn delete_itinerary_item(&self, trip_id: &str, item_id: &str) -> Result<(), StoreError> {
        self.inner.delete_itinerary_item(trip_id, item_id).await
    }
}

pub fn memory_planner() -> TripPlanner<MemoryTripStore> {
    TripPlanner::new(MemoryTripStore::new())
}

pub fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

pub fn paris_trip() -> Trip {
    Trip {
        id: text("trip-1"),
        name: text("Summer in Paris"),
        location: text("Paris"),
        start_date: text("2024-06-01"),
        end_date: text("2024-06-10"),
        ..Trip::default()
    }
}

pub fn new_paris_trip() -> NewTrip {
    NewTrip {
        name: text("Summer in Paris"),
        location: text("Paris"),
        start_date: text("2024-06-01"),
        end_date: text("2024-06-10"),
        description: text("Museums and long lunches"),
    }
}

pub fn flight(custom_name: &str, airline: &str, departure: &str) -> Flight {
    Flight {
        custom_name: text(custom_name),
        airline: text(airline),
        departure: text(departure),
        ..Flight::default()
    }
}

pub fn activity(name: &str, venue: &str, start_date: &str) -> ActivityEntry {
    ActivityEntry {
        activity_name: text(name),
        venue: text(venue),
        start_date: text(start_date),
        ..ActivityEntry::default()
    }
}

pub fn lodging(name: &str, venue: &str, start_date: &str) -> LodgingEntry {
    LodgingEntry {
        lodging_name: text(name),
        venue: text(venue),
        start_date: text(start_date),
        ..LodgingEntry::default()
    }
}

pub fn hertz_rental() -> CarRentalData {
    CarRentalData {
        rental_agency: text("Hertz"),
        pickup_date: text("2024-06-02"),
        pickup_time: text("09:30"),
        ..CarRentalData::default()
    }
}

/// A full create-trip request: two flights, a rental, one activity, one hotel.
pub fn full_request() -> NewTripRequest {
    NewTripRequest {
        trip: new_paris_trip(),
        flight_data: Some(FlightData {
            flights: vec![
                flight("Outbound", "Air France", "2024-06-01"),
                flight("Return", "Air France", "2024-06-10"),
            ],
            total_cost: text("980"),
        }),
        car_rental_data: Some(hertz_rental()),
        activity_data: Some(vec![activity("Museum", "Louvre", "2024-06-03")]),
        lodging_data: Some(vec![lodging("Hotel", "Le Marais Inn", "2024-06-01")]),
    }
}

/// The same trip as the form would post it.
pub fn full_request_json() -> serde_json::Value {
    json!({
        "tripName": "Summer in Paris",
        "tripLocation": "Paris",
        "startDate": "2024-06-01",
        "endDate": "06/10/2024",
        "description": "",
        "flightData": {
            "flights": [
                { "id": 1, "customName": "", "flightNumber": "AF 1234", "airline": "Air France", "seats": "12A", "departure": "2024-06-01" }
            ],
            "totalCost": 980
        },
        "carRentalData": {
            "rentalAgency": "Hertz",
            "pickupDate": "06/02/2024",
            "pickupTime": "09:30",
            "dropoffDate": "",
            "dropoffTime": "",
            "confirmationNumber": "HZ-991",
            "website": "",
            "email": "",
            "totalCost": 0,
            "pickupLocation": { "location": "CDG Terminal 2", "address": "", "phone": "" }
        },
        "activityData": [
            { "activityName": "Museum", "venue": "Louvre", "startDate": "2024-06-03", "startTime": "10:00", "totalCost": "45.50" }
        ],
        "lodgingData": [
            { "lodgingName": "Hotel", "venue": "Le Marais Inn", "confirmationNumber": "LM-77", "startDate": "2024-06-01", "email": "desk@marais.example" }
        ]
    })
}
