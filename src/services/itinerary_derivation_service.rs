//! Itinerary derivation
//!
//! Turns the sub-data collected while drafting a trip (flights, car rental,
//! activities, lodging) into the flat list of itinerary items stored with the
//! trip. Every entry becomes exactly one item; nothing here can fail, missing
//! or malformed fields fall back to defaults instead.
//!
//! Items come out grouped by category in a fixed order (flights, car rental,
//! activities, lodging) and keep their input order inside each group. They
//! are not sorted by day.

use log::debug;

use crate::models::{
    form::{first_present, present},
    ActivityEntry, ActivityType, CarRentalData, Flight, ItineraryItem, LodgingEntry, Trip,
    TripSubData,
};
use crate::utils::compute_day_index;

const DEFAULT_FLIGHT_DESCRIPTION: &str = "Flight";
const DEFAULT_CAR_RENTAL_DESCRIPTION: &str = "Car rental";
const DEFAULT_ACTIVITY_TITLE: &str = "Activity";
const DEFAULT_LODGING_TITLE: &str = "Lodging";

/// One entry of trip sub-data that turns into a single itinerary item.
#[derive(Debug, Clone, Copy)]
pub enum ItemSource<'a> {
    Flight {
        flight: &'a Flight,
        // 1-based position in the flight list
        ordinal: usize,
        total_cost: Option<&'a str>,
    },
    CarRental(&'a CarRentalData),
    Activity(&'a ActivityEntry),
    Lodging(&'a LodgingEntry),
}

impl<'a> ItemSource<'a> {
    /// Every entry that yields an item, in output order.
    pub fn collect(sub_data: &'a TripSubData) -> Vec<ItemSource<'a>> {
        let flight_data = &sub_data.flight_data;
        let total_cost = present(&flight_data.total_cost);

        let flights = flight_data
            .flights
            .iter()
            .enumerate()
            .map(|(index, flight)| ItemSource::Flight {
                flight,
                ordinal: index + 1,
                total_cost,
            });

        let car_rental = present(&sub_data.car_rental_data.rental_agency)
            .map(|_| ItemSource::CarRental(&sub_data.car_rental_data));

        let activities = sub_data.activity_data.iter().map(ItemSource::Activity);
        let lodging = sub_data.lodging_data.iter().map(ItemSource::Lodging);

        flights
            .chain(car_rental)
            .chain(activities)
            .chain(lodging)
            .collect()
    }

    pub fn activity_type(&self) -> ActivityType {
        match self {
            ItemSource::Flight { .. } => ActivityType::Flight,
            ItemSource::CarRental(_) => ActivityType::CarRental,
            ItemSource::Activity(_) => ActivityType::Activity,
            ItemSource::Lodging(_) => ActivityType::Lodging,
        }
    }

    pub fn build(&self, trip: &Trip) -> ItineraryItem {
        match *self {
            ItemSource::Flight {
                flight,
                ordinal,
                total_cost,
            } => build_flight(trip, flight, ordinal, total_cost),
            ItemSource::CarRental(rental) => build_car_rental(trip, rental),
            ItemSource::Activity(activity) => build_activity(trip, activity),
            ItemSource::Lodging(lodging) => build_lodging(trip, lodging),
        }
    }
}

pub struct ItineraryDerivationService;

impl ItineraryDerivationService {
    /// Derive the itinerary items for a freshly created trip.
    pub fn derive(trip: &Trip, sub_data: &TripSubData) -> Vec<ItineraryItem> {
        let sources = ItemSource::collect(sub_data);
        let items: Vec<ItineraryItem> = sources.iter().map(|source| source.build(trip)).collect();

        debug!(
            "Derived {} itinerary items for trip {:?} ({} flights, {} car rental, {} activities, {} lodging)",
            items.len(),
            trip.id,
            count_of(&sources, ActivityType::Flight),
            count_of(&sources, ActivityType::CarRental),
            count_of(&sources, ActivityType::Activity),
            count_of(&sources, ActivityType::Lodging),
        );

        items
    }
}

fn count_of(sources: &[ItemSource<'_>], activity_type: ActivityType) -> usize {
    sources
        .iter()
        .filter(|source| source.activity_type() == activity_type)
        .count()
}

/// Newline-joined `Label: value` lines, skipping blank values.
#[derive(Debug, Default)]
struct Lines(Vec<String>);

impl Lines {
    fn field(mut self, label: &str, value: &Option<String>) -> Self {
        if let Some(value) = present(value) {
            self.0.push(format!("{}: {}", label, value));
        }
        self
    }

    fn line(mut self, line: Option<String>) -> Self {
        if let Some(line) = line {
            self.0.push(line);
        }
        self
    }

    fn joined(self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join("\n"))
        }
    }
}

fn contact_notes(
    website: &Option<String>,
    email: &Option<String>,
    total_cost: &Option<String>,
) -> Option<String> {
    Lines::default()
        .field("Website", website)
        .field("Email", email)
        .field("Total Cost", total_cost)
        .joined()
}

// "Pickup: 2024-06-02 10:00", with whichever of the two parts is set
fn schedule_line(label: &str, date: &Option<String>, time: &Option<String>) -> Option<String> {
    let parts: Vec<&str> = [present(date), present(time)].into_iter().flatten().collect();
    if parts.is_empty() {
        None
    } else {
        Some(format!("{}: {}", label, parts.join(" ")))
    }
}

fn trip_place(trip: &Trip) -> Option<&str> {
    first_present(&[&trip.location, &trip.name])
}

fn owned(value: &Option<String>) -> Option<String> {
    present(value).map(str::to_string)
}

fn build_flight(
    trip: &Trip,
    flight: &Flight,
    ordinal: usize,
    total_cost: Option<&str>,
) -> ItineraryItem {
    let flight_date = first_present(&[&flight.departure, &flight.date]);

    let title = first_present(&[&flight.custom_name, &flight.flight_number])
        .map(str::to_string)
        .unwrap_or_else(|| format!("Flight {}", ordinal));

    let description = Lines::default()
        .field("Airline", &flight.airline)
        .field("Flight", &flight.flight_number)
        .field("Seats", &flight.seats)
        .joined()
        .unwrap_or_else(|| DEFAULT_FLIGHT_DESCRIPTION.to_string());

    let notes = Lines::default()
        .line(total_cost.map(|cost| format!("Total Cost: {}", cost)))
        .joined();

    ItineraryItem {
        day_index: compute_day_index(trip.start_date.as_deref(), flight_date),
        title,
        description,
        start_time: None,
        end_time: None,
        location_name: trip_place(trip)
            .unwrap_or(DEFAULT_FLIGHT_DESCRIPTION)
            .to_string(),
        activity_type: ActivityType::Flight,
        notes,
    }
}

fn build_car_rental(trip: &Trip, rental: &CarRentalData) -> ItineraryItem {
    let agency = present(&rental.rental_agency).unwrap_or_default();

    let description = Lines::default()
        .line(schedule_line("Pickup", &rental.pickup_date, &rental.pickup_time))
        .line(schedule_line("Dropoff", &rental.dropoff_date, &rental.dropoff_time))
        .field("Confirmation", &rental.confirmation_number)
        .joined()
        .unwrap_or_else(|| DEFAULT_CAR_RENTAL_DESCRIPTION.to_string());

    let pickup_place = rental
        .pickup_location
        .as_ref()
        .and_then(|pickup| present(&pickup.location));

    let location_name = pickup_place
        .or_else(|| present(&rental.rental_agency))
        .or_else(|| trip_place(trip))
        .unwrap_or_default()
        .to_string();

    ItineraryItem {
        day_index: compute_day_index(trip.start_date.as_deref(), present(&rental.pickup_date)),
        title: format!("Car Rental - {}", agency),
        description,
        start_time: owned(&rental.pickup_time),
        end_time: owned(&rental.dropoff_time),
        location_name,
        activity_type: ActivityType::CarRental,
        notes: contact_notes(&rental.website, &rental.email, &rental.total_cost),
    }
}

fn build_activity(trip: &Trip, activity: &ActivityEntry) -> ItineraryItem {
    let description = Lines::default()
        .field("Venue", &activity.venue)
        .field("Address", &activity.address)
        .field("Phone", &activity.phone)
        .joined()
        .or_else(|| owned(&activity.description))
        .unwrap_or_else(|| DEFAULT_ACTIVITY_TITLE.to_string());

    let location_name = first_present(&[&activity.venue, &activity.location])
        .or_else(|| trip_place(trip))
        .unwrap_or_default()
        .to_string();

    ItineraryItem {
        day_index: compute_day_index(trip.start_date.as_deref(), present(&activity.start_date)),
        title: present(&activity.activity_name)
            .unwrap_or(DEFAULT_ACTIVITY_TITLE)
            .to_string(),
        description,
        start_time: owned(&activity.start_time),
        end_time: owned(&activity.end_time),
        location_name,
        activity_type: ActivityType::Activity,
        notes: contact_notes(&activity.website, &activity.email, &activity.total_cost),
    }
}

fn build_lodging(trip: &Trip, lodging: &LodgingEntry) -> ItineraryItem {
    let description = Lines::default()
        .field("Venue", &lodging.venue)
        .field("Address", &lodging.address)
        .field("Phone", &lodging.phone)
        .field("Confirmation", &lodging.confirmation_number)
        .joined()
        .unwrap_or_else(|| DEFAULT_LODGING_TITLE.to_string());

    let location_name = first_present(&[&lodging.venue, &lodging.location])
        .or_else(|| trip_place(trip))
        .unwrap_or_default()
        .to_string();

    ItineraryItem {
        day_index: compute_day_index(trip.start_date.as_deref(), present(&lodging.start_date)),
        title: present(&lodging.lodging_name)
            .unwrap_or(DEFAULT_LODGING_TITLE)
            .to_string(),
        description,
        start_time: owned(&lodging.start_time),
        end_time: owned(&lodging.end_time),
        location_name,
        activity_type: ActivityType::Lodging,
        notes: contact_notes(&lodging.website, &lodging.email, &lodging.total_cost),
    }
}
