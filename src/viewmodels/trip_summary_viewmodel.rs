// ============================================================================
// TRIP SUMMARY VIEWMODEL - Textos del header y tabla de paradas programadas
// ============================================================================

use crate::models::{Itinerary, ScheduledStop};
use crate::utils::i18n::t;

/// Datos ya formateados para el header del resumen
#[derive(Debug, Clone, PartialEq)]
pub struct TripSummary {
    pub distance_text: String,
    pub duration_text: String,
    pub pickup_name: String,
    pub dropoff_name: String,
    pub fuel_stop_count: usize,
    pub rest_stop_count: usize,
    /// "Fuel stops: 2 · Rest stops: 1"
    pub stops_text: String,
}

/// Fila de la tabla de paradas programadas
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRow {
    pub kind_label: String,
    pub arrival: String,
    pub departure: String,
    pub duration: String,
}

pub struct TripSummaryViewModel;

impl TripSummaryViewModel {
    pub fn summarize(itinerary: &Itinerary, lang: &str) -> TripSummary {
        TripSummary {
            distance_text: format_with_unit(itinerary.total_miles, &t("miles", lang)),
            duration_text: format_with_unit(itinerary.total_duration, &t("hours", lang)),
            pickup_name: itinerary.pickup_location.name.clone(),
            dropoff_name: itinerary.dropoff_location.name.clone(),
            fuel_stop_count: itinerary.fuel_stops.len(),
            rest_stop_count: itinerary.rest_stops.len(),
            stops_text: format!(
                "{}: {} · {}: {}",
                t("fuel_stops", lang), itinerary.fuel_stops.len(),
                t("rest_stops", lang), itinerary.rest_stops.len(),
            ),
        }
    }

    pub fn schedule_rows(stops: &[ScheduledStop], lang: &str) -> Vec<ScheduleRow> {
        stops
            .iter()
            .map(|stop| ScheduleRow {
                kind_label: if stop.is_fuel_stop { t("fuel_stop", lang) } else { t("rest_stop", lang) },
                arrival: stop.arrival_time.format("%b %d, %H:%M").to_string(),
                departure: stop.departure_time.format("%b %d, %H:%M").to_string(),
                duration: format!("{:.2} h", stop.duration_hours()),
            })
            .collect()
    }
}

/// Dos decimales + unidad ("123.46 miles")
pub fn format_with_unit(value: f64, unit: &str) -> String {
    format!("{:.2} {}", value, unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn itinerary(miles: serde_json::Value, duration: serde_json::Value) -> Itinerary {
        let value = json!({
            "currentLocation": { "lat": 0.0, "lng": 0.0, "name": "Dallas, TX" },
            "pickupLocation": { "lat": 1.0, "lng": 1.0, "name": "Austin, TX" },
            "dropoffLocation": { "lat": 2.0, "lng": 2.0, "name": "Denver, CO" },
            "totalMiles": miles,
            "totalDuration": duration,
            "fuelStops": [ { "lat": 0.5, "lng": 0.5, "price": 3.1 }, { "lat": 1.5, "lng": 1.5, "price": 3.3 } ],
            "restStops": [ { "lat": 1.2, "lng": 1.2, "amenities": [] } ],
            "schedule": [
                {
                    "arrivalTime": "2025-03-01T19:00:00",
                    "departureTime": "2025-03-01T19:30:00",
                    "restDuration": 0.5,
                    "isFuelStop": true
                }
            ]
        });
        Itinerary::from_state(Some(&value)).unwrap()
    }

    #[test]
    fn test_header_formats_two_decimals() {
        let summary = TripSummaryViewModel::summarize(&itinerary(json!(123.456), json!(5)), "EN");
        assert_eq!(summary.distance_text, "123.46 miles");
        assert_eq!(summary.duration_text, "5.00 hours");
        assert_eq!(summary.pickup_name, "Austin, TX");
        assert_eq!(summary.dropoff_name, "Denver, CO");
    }

    #[test]
    fn test_header_counts_stops() {
        let it = itinerary(json!(1), json!(1));
        let summary = TripSummaryViewModel::summarize(&it, "EN");
        assert_eq!((summary.fuel_stop_count, summary.rest_stop_count), (2, 1));
        assert_eq!(summary.stops_text, "Fuel stops: 2 · Rest stops: 1");
        let es = TripSummaryViewModel::summarize(&it, "ES");
        assert_eq!(es.stops_text, "Paradas de combustible: 2 · Paradas de descanso: 1");
    }

    #[test]
    fn test_header_accepts_numeric_strings() {
        let summary = TripSummaryViewModel::summarize(&itinerary(json!("812.1"), json!("14.456")), "EN");
        assert_eq!(summary.distance_text, "812.10 miles");
        assert_eq!(summary.duration_text, "14.46 hours");
    }

    #[test]
    fn test_schedule_rows() {
        let it = itinerary(json!(1), json!(1));
        let rows = TripSummaryViewModel::schedule_rows(&it.schedule, "EN");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind_label, "Fuel stop");
        assert_eq!(rows[0].arrival, "Mar 01, 19:00");
        assert_eq!(rows[0].duration, "0.50 h");
    }
}
