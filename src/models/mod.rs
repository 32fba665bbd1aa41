pub mod itinerary;
pub mod schedule;
pub mod eld;
pub mod trip_request;

pub use itinerary::{Itinerary, ItineraryError, LatLng, Waypoint, FuelStop, RestStop};
pub use schedule::ScheduledStop;
pub use eld::{DutyStatus, EldDayLog, EldLogEntry};
pub use trip_request::{TripRequest, MAX_CYCLE_HOURS};
