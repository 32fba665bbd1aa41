use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use crate::models::itinerary::deserialize_numeric;

/// Parada programada por el planificador HOS del backend
/// (combustible cada 1000 millas, descanso de 10h al agotar las 11h de conducción)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledStop {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(alias = "arrival_time", deserialize_with = "deserialize_datetime")]
    pub arrival_time: NaiveDateTime,
    #[serde(alias = "departure_time", deserialize_with = "deserialize_datetime")]
    pub departure_time: NaiveDateTime,
    /// Duración en horas (0.5 combustible, 10 descanso)
    #[serde(default, alias = "rest_duration", deserialize_with = "deserialize_numeric")]
    pub rest_duration: f64,
    #[serde(default, alias = "is_fuel_stop")]
    pub is_fuel_stop: bool,
}

impl ScheduledStop {
    /// Duración declarada por el backend; sin ella, la diferencia llegada → salida
    pub fn duration_hours(&self) -> f64 {
        if self.rest_duration > 0.0 {
            self.rest_duration
        } else {
            (self.departure_time - self.arrival_time).num_minutes().max(0) as f64 / 60.0
        }
    }
}

/// Acepta RFC 3339 ("2025-03-01T08:00:00Z") o ISO sin zona ("2025-03-01T08:00:00")
fn deserialize_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid date-time: {}", raw))
    })
}

pub(crate) fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_naive_and_offset_times() {
        let value = json!({
            "arrivalTime": "2025-03-01T08:00:00",
            "departureTime": "2025-03-01T18:00:00Z",
            "restDuration": 10,
            "isFuelStop": false
        });
        let stop: ScheduledStop = serde_json::from_value(value).unwrap();
        assert_eq!(stop.duration_hours(), 10.0);
        assert!(!stop.is_fuel_stop);
        assert!(stop.lat.is_none());
    }

    #[test]
    fn test_rejects_garbage_time() {
        let value = json!({ "arrivalTime": "yesterday", "departureTime": "2025-03-01T08:00:00" });
        assert!(serde_json::from_value::<ScheduledStop>(value).is_err());
    }

    #[test]
    fn test_offset_times_keep_their_wall_clock() {
        let eastern = parse_datetime("2025-03-01T08:00:00-05:00").unwrap();
        assert_eq!(eastern.format("%Y-%m-%d %H:%M").to_string(), "2025-03-01 08:00");
        let ahead = parse_datetime("2025-03-01T23:30:00+02:00").unwrap();
        assert_eq!(ahead.format("%Y-%m-%d %H:%M").to_string(), "2025-03-01 23:30");
    }

    #[test]
    fn test_backend_microseconds_and_space_separator() {
        let dt = parse_datetime("2025-03-01 08:15:30.123456").unwrap();
        assert_eq!(dt.format("%H:%M:%S").to_string(), "08:15:30");
        assert!(parse_datetime("2025-03-01T08:15:30.5").is_some());
    }

    #[test]
    fn test_declared_rest_duration_wins() {
        let value = json!({
            "arrival_time": "2025-03-01T12:00:00",
            "departure_time": "2025-03-01T12:45:00",
            "rest_duration": "0.5",
            "is_fuel_stop": true
        });
        let stop: ScheduledStop = serde_json::from_value(value).unwrap();
        assert!(stop.is_fuel_stop);
        assert_eq!(stop.duration_hours(), 0.5);
    }
}
