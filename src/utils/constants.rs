/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8000 (por defecto)
/// - Producción: via BACKEND_URL env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Prefijo de la API REST del backend
pub const API_PREFIX: &str = "/api/";

/// Endpoint de cálculo de itinerario (relativo al prefijo)
pub const PLAN_TRIP_PATH: &str = "plan-trip/";

/// Timeout por defecto: 20 minutos (el cálculo de rutas es lento)
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u32 = 20 * 60;

/// Tiles raster de OpenStreetMap (sin autenticación)
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// ID del contenedor del mapa en la vista de resumen
pub const TRIP_MAP_CONTAINER_ID: &str = "trip-map";

// Estilo fijo de las polilíneas
pub const ROUTE_TO_PICKUP_COLOR: &str = "#2563eb";
pub const ROUTE_TO_PICKUP_WEIGHT: u32 = 4;
pub const ROUTE_TO_PICKUP_DASH: &str = "10, 10";
pub const ROUTE_TO_DROPOFF_COLOR: &str = "#16a34a";
pub const ROUTE_TO_DROPOFF_WEIGHT: u32 = 6;

/// Clave de localStorage para el idioma
pub const LANGUAGE_PREF_KEY: &str = "language";
