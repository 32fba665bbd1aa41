use serde::{Deserialize, Serialize};

/// Horas máximas de servicio en el ciclo de 8 días
pub const MAX_CYCLE_HOURS: f64 = 70.0;

/// Payload del formulario del planner hacia el backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    /// Horas ya usadas del ciclo 70h/8 días
    pub current_cycle_used: f64,
}
