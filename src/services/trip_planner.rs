//! Trip planner state
//!
//! Holds what a client session knows about its trips: the drafts being filled
//! in for the next trip, the trip list as last loaded from the store, the
//! selected trip and the most recent error. Creating a trip runs the whole
//! flow: store the trip, derive its itinerary, then store each item in order.

use chrono::NaiveDate;
use log::{error, info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::config::PlannerConfig;
use crate::models::{
    ActivityEntry, CarRentalData, FlightData, ItineraryItem, LodgingEntry, NewTripRequest,
    StoredItineraryItem, Trip, TripSubData,
};
use crate::services::itinerary_derivation_service::ItineraryDerivationService;
use crate::services::store::{StoreError, TripStore};

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(
        "trip {trip_id} was created but only {persisted} of {total} itinerary items were saved: {source}"
    )]
    PartialItinerary {
        trip_id: String,
        persisted: usize,
        total: usize,
        source: StoreError,
    },
    #[error("trip id is required")]
    MissingTripId,
}

/// A created trip together with the itinerary items stored for it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedTrip {
    pub trip: Trip,
    pub itinerary: Vec<StoredItineraryItem>,
}

pub struct TripPlanner<S> {
    store: S,
    config: PlannerConfig,
    drafts: TripSubData,
    trips: Vec<Trip>,
    selected_trip_id: Option<String>,
    last_error: Option<String>,
}

impl<S: TripStore> TripPlanner<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, PlannerConfig::default())
    }

    pub fn with_config(store: S, config: PlannerConfig) -> Self {
        Self {
            store,
            config,
            drafts: TripSubData::default(),
            trips: Vec::new(),
            selected_trip_id: None,
            last_error: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn fail(&mut self, err: PlannerError) -> PlannerError {
        error!("{}", err);
        self.last_error = Some(err.to_string());
        err
    }

    // Drafts

    pub fn drafts(&self) -> &TripSubData {
        &self.drafts
    }

    pub fn set_flight_data(&mut self, flight_data: FlightData) {
        self.drafts.flight_data = flight_data;
    }

    pub fn set_car_rental_data(&mut self, car_rental_data: CarRentalData) {
        self.drafts.car_rental_data = car_rental_data;
    }

    pub fn set_activity_data(&mut self, activity_data: Vec<ActivityEntry>) {
        self.drafts.activity_data = activity_data;
    }

    pub fn set_lodging_data(&mut self, lodging_data: Vec<LodgingEntry>) {
        self.drafts.lodging_data = lodging_data;
    }

    pub fn clear_flight_data(&mut self) {
        self.drafts.flight_data = FlightData::default();
    }

    pub fn clear_car_rental_data(&mut self) {
        self.drafts.car_rental_data = CarRentalData::default();
    }

    /// Start a fresh trip: drop every draft block and the selection.
    pub fn clear_drafts(&mut self) {
        self.drafts = TripSubData::default();
        self.clear_selection();
    }

    // Selection and listing

    pub fn select_trip(&mut self, trip_id: &str) -> bool {
        if self.find_trip(trip_id).is_none() {
            return false;
        }
        self.selected_trip_id = Some(trip_id.to_string());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected_trip_id = None;
    }

    pub fn selected_trip(&self) -> Option<&Trip> {
        self.selected_trip_id
            .as_deref()
            .and_then(|id| self.find_trip(id))
    }

    pub fn find_trip(&self, trip_id: &str) -> Option<&Trip> {
        self.trips
            .iter()
            .find(|trip| trip.id.as_deref() == Some(trip_id))
    }

    pub fn upcoming_trips(&self, today: NaiveDate) -> Vec<&Trip> {
        self.trips
            .iter()
            .filter(|trip| trip.is_upcoming(today))
            .collect()
    }

    /// The first few upcoming trips, in list order.
    pub fn recent_trips(&self, today: NaiveDate) -> Vec<&Trip> {
        self.trips
            .iter()
            .filter(|trip| trip.is_upcoming(today))
            .take(self.config.recent_trips_limit)
            .collect()
    }

    pub fn past_trips(&self, today: NaiveDate) -> Vec<&Trip> {
        self.trips.iter().filter(|trip| trip.is_past(today)).collect()
    }

    // Store-backed operations

    pub async fn load_trips(&mut self) -> Result<&[Trip], PlannerError> {
        self.last_error = None;
        match self.store.list_trips().await {
            Ok(trips) => {
                info!("Loaded {} trips", trips.len());
                self.trips = trips;
                Ok(&self.trips)
            }
            Err(err) => Err(self.fail(err.into())),
        }
    }

    /// Create a trip and its itinerary.
    ///
    /// Blocks missing from the request come from the drafts. Items are stored
    /// one at a time in derivation order; if one fails the trip and the items
    /// before it stay stored and `PartialItinerary` says how far it got. Drafts
    /// are only cleared once everything is stored.
    pub async fn add_trip(&mut self, request: NewTripRequest) -> Result<PlannedTrip, PlannerError> {
        self.last_error = None;
        let (new_trip, sub_data) = request.resolve(&self.drafts);

        let trip = match self.store.create_trip(new_trip).await {
            Ok(trip) => trip,
            Err(err) => return Err(self.fail(err.into())),
        };
        let Some(trip_id) = trip.id.clone() else {
            return Err(self.fail(PlannerError::MissingTripId));
        };

        let items = ItineraryDerivationService::derive(&trip, &sub_data);
        let total = items.len();
        let mut itinerary = Vec::with_capacity(total);

        for item in items {
            match self.store.create_itinerary_item(&trip_id, item).await {
                Ok(stored) => itinerary.push(stored),
                Err(source) => {
                    warn!(
                        "Itinerary for trip {} stopped after {} of {} items",
                        trip_id,
                        itinerary.len(),
                        total
                    );
                    self.trips.insert(0, trip);
                    return Err(self.fail(PlannerError::PartialItinerary {
                        trip_id,
                        persisted: itinerary.len(),
                        total,
                        source,
                    }));
                }
            }
        }

        info!("Created trip {} with {} itinerary items", trip_id, total);
        self.trips.insert(0, trip.clone());
        self.drafts = TripSubData::default();

        Ok(PlannedTrip { trip, itinerary })
    }

    pub async fn update_trip(&mut self, trip: Trip) -> Result<Trip, PlannerError> {
        self.last_error = None;
        if trip.id.is_none() {
            return Err(self.fail(PlannerError::MissingTripId));
        }

        match self.store.update_trip(trip).await {
            Ok(updated) => {
                if let Some(existing) = self.trips.iter_mut().find(|t| t.id == updated.id) {
                    *existing = updated.clone();
                }
                Ok(updated)
            }
            Err(err) => Err(self.fail(err.into())),
        }
    }

    pub async fn delete_trip(&mut self, trip_id: &str) -> bool {
        self.last_error = None;
        match self.store.delete_trip(trip_id).await {
            Ok(()) => {
                self.trips.retain(|trip| trip.id.as_deref() != Some(trip_id));
                if self.selected_trip_id.as_deref() == Some(trip_id) {
                    self.selected_trip_id = None;
                }
                true
            }
            Err(err) => {
                self.fail(err.into());
                false
            }
        }
    }

    /// Items stored for a trip; empty when they could not be loaded.
    pub async fn load_itinerary_items(&mut self, trip_id: &str) -> Vec<StoredItineraryItem> {
        self.last_error = None;
        match self.store.list_itinerary_items(trip_id).await {
            Ok(items) => items,
            Err(err) => {
                self.fail(err.into());
                Vec::new()
            }
        }
    }

    pub async fn add_itinerary_item(
        &mut self,
        trip_id: &str,
        item: ItineraryItem,
    ) -> Result<StoredItineraryItem, PlannerError> {
        self.last_error = None;
        match self.store.create_itinerary_item(trip_id, item).await {
            Ok(stored) => Ok(stored),
            Err(err) => Err(self.fail(err.into())),
        }
    }

    pub async fn update_itinerary_item(
        &mut self,
        trip_id: &str,
        item_id: &str,
        item: ItineraryItem,
    ) -> Result<StoredItineraryItem, PlannerError> {
        self.last_error = None;
        match self.store.update_itinerary_item(trip_id, item_id, item).await {
            Ok(stored) => Ok(stored),
            Err(err) => Err(self.fail(err.into())),
        }
    }

    pub async fn delete_itinerary_item(&mut self, trip_id: &str, item_id: &str) -> bool {
        self.last_error = None;
        match self.store.delete_itinerary_item(trip_id, item_id).await {
            Ok(()) => true,
            Err(err) => {
                self.fail(err.into());
                false
            }
        }
    }
}
