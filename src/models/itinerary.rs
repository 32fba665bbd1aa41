// ============================================================================
// ITINERARY - Modelo del viaje calculado por el backend
// ============================================================================
// Valor inmutable: llega como navigation state y se descarta al navegar fuera
// ============================================================================

use serde::{Deserialize, Deserializer, Serialize, de::{DeserializeOwned, Visitor}};
use std::fmt;
use crate::models::eld::EldDayLog;
use crate::models::schedule::ScheduledStop;

/// Vértice de una polilínea
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Formato [lat, lng] que espera Leaflet
    pub fn to_pair(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

/// Punto con nombre (ubicación actual, pickup, dropoff)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub name: String,
}

impl Waypoint {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Parada de combustible
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelStop {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, deserialize_with = "deserialize_numeric")]
    pub price: f64,
}

impl FuelStop {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Parada de descanso
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestStop {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl RestStop {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// Amenities separadas por coma ("wifi, food")
    pub fn amenities_text(&self) -> String {
        self.amenities.join(", ")
    }
}

/// Itinerario completo tal como lo devuelve el backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub current_location: Waypoint,
    pub pickup_location: Waypoint,
    pub dropoff_location: Waypoint,
    #[serde(default)]
    pub fuel_stops: Vec<FuelStop>,
    #[serde(default)]
    pub rest_stops: Vec<RestStop>,
    #[serde(default)]
    pub route_to_pickup: Vec<LatLng>,
    #[serde(default)]
    pub route_to_dropoff: Vec<LatLng>,
    #[serde(default, deserialize_with = "deserialize_numeric")]
    pub total_miles: f64,
    #[serde(default, deserialize_with = "deserialize_numeric")]
    pub total_duration: f64,
    /// Paradas programadas según las reglas HOS (opcional, tolerante)
    #[serde(default, deserialize_with = "deserialize_lenient_vec")]
    pub schedule: Vec<ScheduledStop>,
    /// Logs ELD diarios (opcional, tolerante)
    #[serde(default, alias = "eld_logs", deserialize_with = "deserialize_lenient_vec")]
    pub eld_logs: Vec<EldDayLog>,
}

impl Itinerary {
    /// Leer el itinerario desde el navigation state.
    /// Sin state (o un objeto vacío) = MissingState; campos requeridos ausentes = Invalid.
    pub fn from_state(state: Option<&serde_json::Value>) -> Result<Self, ItineraryError> {
        let value = match state {
            None | Some(serde_json::Value::Null) => return Err(ItineraryError::MissingState),
            Some(serde_json::Value::Object(map)) if map.is_empty() => {
                return Err(ItineraryError::MissingState)
            }
            Some(value) => value,
        };

        Self::deserialize(value).map_err(|e| ItineraryError::Invalid(e.to_string()))
    }

    /// Todos los puntos que deben quedar dentro del viewport
    pub fn viewport_points(&self) -> Vec<LatLng> {
        let mut points = vec![
            self.current_location.position(),
            self.pickup_location.position(),
            self.dropoff_location.position(),
        ];
        points.extend(self.fuel_stops.iter().map(FuelStop::position));
        points.extend(self.rest_stops.iter().map(RestStop::position));
        points
    }
}

/// Error al leer el itinerario desde el navigation state
#[derive(Debug, Clone, PartialEq)]
pub enum ItineraryError {
    MissingState,
    Invalid(String),
}

impl fmt::Display for ItineraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItineraryError::MissingState => write!(f, "No itinerary in navigation state"),
            ItineraryError::Invalid(msg) => write!(f, "Invalid itinerary: {}", msg),
        }
    }
}

impl std::error::Error for ItineraryError {}

/// Deserializador para campos numéricos que el backend envía como número o como string.
/// Strings se leen como parseFloat: se toma el prefijo numérico; sin prefijo válido = 0.0
pub(crate) fn deserialize_numeric<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct NumericVisitor;

    impl<'de> Visitor<'de> for NumericVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("number or numeric string or null")
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value as f64)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value as f64)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(parse_float_prefix(value).unwrap_or(0.0))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(0.0)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(0.0)
        }
    }

    deserializer.deserialize_any(NumericVisitor)
}

/// Prefijo numérico más largo de un string, como parseFloat ("12.5 mi" → 12.5, "1e3" → 1000).
/// Valores no finitos ("Infinity", "1e400") = None
pub(crate) fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    // Exponente solo si le sigue al menos un dígito ("1e" → 1)
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Lista opcional tolerante: una entrada ilegible se descarta con warning y
/// algo que no es un array cuenta como lista vacía. Nunca invalida el itinerario
pub(crate) fn deserialize_lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(lenient_vec(raw))
}

fn lenient_vec<T: DeserializeOwned>(raw: serde_json::Value) -> Vec<T> {
    match raw {
        serde_json::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .filter_map(|(i, item)| match serde_json::from_value(item) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("⚠️ [ITINERARY] Entrada #{} descartada: {}", i, e);
                    None
                }
            })
            .collect(),
        serde_json::Value::Null => Vec::new(),
        other => {
            log::warn!("⚠️ [ITINERARY] Se esperaba una lista, ignorando: {}", other);
            Vec::new()
        }
    }
}
