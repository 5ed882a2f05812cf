pub mod itinerary_derivation_service;
pub mod store;
pub mod trip_planner;

pub use itinerary_derivation_service::{ItemSource, ItineraryDerivationService};
pub use store::{MemoryTripStore, StoreError, TripStore};
pub use trip_planner::{PlannedTrip, PlannerError, TripPlanner};
