// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Configurado una sola vez desde CONFIG: base URL, timeout de 20 min,
// credenciales cross-origin y headers JSON. Sin reintentos ni interceptores.
// ============================================================================

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use web_sys::{AbortController, RequestCredentials};
use crate::config::{AppConfig, CONFIG};
use crate::models::TripRequest;
use crate::utils::constants::PLAN_TRIP_PATH;

/// Error de una request al backend (sin transformar el payload)
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Serialization(String),
    Network(String),
    Timeout(u32),
    Http { status: u16, body: String },
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Timeout(seconds) => write!(f, "Request timed out after {} seconds", seconds),
            ApiError::Http { status, body } => write!(f, "HTTP {}: {}", status, body),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    /// Cliente con la configuración global
    pub fn new() -> Self {
        Self::with_config(&CONFIG)
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    /// Solicitar el cálculo del itinerario. La respuesta se devuelve opaca:
    /// viaja tal cual como navigation state hasta la vista de resumen
    pub async fn plan_trip(&self, request: &TripRequest) -> Result<serde_json::Value, ApiError> {
        log::info!("🗺️ [API] Calculando itinerario: {} → {} → {} (ciclo {}h)",
                   request.current_location, request.pickup_location,
                   request.dropoff_location, request.current_cycle_used);

        let itinerary = self.post_json::<_, serde_json::Value>(PLAN_TRIP_PATH, request).await?;

        log::info!("✅ [API] Itinerario recibido");
        Ok(itinerary)
    }

    /// POST JSON one-shot con timeout por AbortController
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let controller = AbortController::new()
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        let timed_out = Rc::new(Cell::new(false));
        let timeout = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            Timeout::new(self.config.request_timeout_ms(), move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let signal = controller.signal();
        let result = Request::post(&url)
            .header("Accept", "application/json")
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(&signal))
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await;

        // Cancelar el timeout (drop lo desregistra)
        drop(timeout);

        let response = match result {
            Ok(response) => response,
            Err(_) if timed_out.get() => {
                log::error!("⏰ [API] Timeout en {}", url);
                return Err(ApiError::Timeout(self.config.request_timeout_seconds));
            }
            Err(e) => return Err(ApiError::Network(e.to_string())),
        };

        if !response.ok() {
            let status = response.status();
            let body = response.text().await
                .unwrap_or_else(|_| response.status_text());
            return Err(ApiError::Http { status, body });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

// Cliente compartido: se configura una sola vez desde CONFIG
lazy_static::lazy_static! {
    pub static ref API_CLIENT: ApiClient = ApiClient::new();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_trip_url() {
        let config = AppConfig {
            backend_url: "https://trips.example.com/".to_string(),
            ..AppConfig::default()
        };
        let client = ApiClient::with_config(&config);
        assert_eq!(client.url(PLAN_TRIP_PATH), "https://trips.example.com/api/plan-trip/");
    }

    #[test]
    fn test_shared_client_uses_global_config() {
        assert_eq!(API_CLIENT.url(PLAN_TRIP_PATH), CONFIG.api_url(PLAN_TRIP_PATH));
        assert_eq!(API_CLIENT.config.request_timeout_seconds, CONFIG.request_timeout_seconds);
    }

    #[test]
    fn test_error_display_keeps_backend_payload() {
        let err = ApiError::Http { status: 400, body: "{\"error\":\"bad address\"}".to_string() };
        assert_eq!(err.to_string(), "HTTP 400: {\"error\":\"bad address\"}");
        assert_eq!(ApiError::Timeout(1200).to_string(), "Request timed out after 1200 seconds");
    }

    #[test]
    fn test_trip_request_wire_format() {
        let request = TripRequest {
            current_location: "Dallas, TX".to_string(),
            pickup_location: "Austin, TX".to_string(),
            dropoff_location: "Denver, CO".to_string(),
            current_cycle_used: 8.0,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["current_location"], "Dallas, TX");
        assert_eq!(json["current_cycle_used"], 8.0);
    }
}
