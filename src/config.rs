use serde::{Deserialize, Serialize};
use crate::utils::constants::{
    BACKEND_URL, API_PREFIX, DEFAULT_REQUEST_TIMEOUT_SECONDS, OSM_TILE_URL, OSM_ATTRIBUTION,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub api_prefix: String,
    pub request_timeout_seconds: u32,
    pub enable_logging: bool,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: BACKEND_URL.to_string(),
            api_prefix: API_PREFIX.to_string(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            enable_logging: true,
            map_config: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub tile_url_template: String,
    pub tile_attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url_template: OSM_TILE_URL.to_string(),
            tile_attribution: OSM_ATTRIBUTION.to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url: BACKEND_URL.to_string(),
            api_prefix: option_env!("API_PREFIX")
                .unwrap_or(API_PREFIX).to_string(),
            request_timeout_seconds: option_env!("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            map_config: MapConfig {
                tile_url_template: option_env!("TILE_URL_TEMPLATE")
                    .unwrap_or(OSM_TILE_URL).to_string(),
                tile_attribution: option_env!("TILE_ATTRIBUTION")
                    .unwrap_or(OSM_ATTRIBUTION).to_string(),
            },
        }
    }

    /// URL completa de un endpoint: base + prefijo + path, sin barras dobles
    pub fn api_url(&self, path: &str) -> String {
        join_url(&self.backend_url, &self.api_prefix, path)
    }

    /// Timeout de requests en milisegundos (para gloo_timers)
    pub fn request_timeout_ms(&self) -> u32 {
        self.request_timeout_seconds.saturating_mul(1000)
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn join_url(base: &str, prefix: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let prefix = prefix.trim_matches('/');
    let path = path.trim_start_matches('/');

    if prefix.is_empty() {
        format!("{}/{}", base, path)
    } else {
        format!("{}/{}/{}", base, prefix, path)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_without_double_slashes() {
        assert_eq!(join_url("http://host:8000/", "/api/", "/plan-trip/"), "http://host:8000/api/plan-trip/");
        assert_eq!(join_url("http://host", "api", "plan-trip/"), "http://host/api/plan-trip/");
        assert_eq!(join_url("http://host", "", "plan-trip/"), "http://host/plan-trip/");
    }

    #[test]
    fn test_default_timeout_is_twenty_minutes() {
        let config = AppConfig::default();
        assert_eq!(config.request_timeout_seconds, 1200);
        assert_eq!(config.request_timeout_ms(), 1_200_000);
    }

    #[test]
    fn test_api_url_uses_api_prefix() {
        let config = AppConfig {
            backend_url: "https://trips.example.com".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_url("plan-trip/"), "https://trips.example.com/api/plan-trip/");
    }
}
