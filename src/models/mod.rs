pub mod activity;
pub mod car_rental;
pub mod flight;
pub mod form;
pub mod itinerary;
pub mod lodging;
pub mod trip;
pub mod user;

pub use activity::ActivityEntry;
pub use car_rental::{CarRentalData, RentalInfo, RentalLocation};
pub use flight::{Flight, FlightData};
pub use itinerary::{ActivityType, ItineraryItem, StoredItineraryItem};
pub use lodging::LodgingEntry;
pub use trip::{NewTrip, NewTripRequest, Trip, TripSubData};
pub use user::{User, UserSummary};
