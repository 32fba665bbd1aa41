// ============================================================================
// PLANNER VIEWMODEL - Validación del formulario + request al backend
// ============================================================================

use std::fmt;
use wasm_bindgen_futures::spawn_local;
use crate::models::{TripRequest, MAX_CYCLE_HOURS};
use crate::router::{self, Route};
use crate::services::api_client::API_CLIENT;
use crate::state::app_state::AppState;
use crate::utils::i18n::t;

/// Valores crudos del formulario (tal cual los escribe el usuario)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannerForm {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub current_cycle_used: String,
}

/// Campo del formulario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerField {
    CurrentLocation,
    PickupLocation,
    DropoffLocation,
    CurrentCycleUsed,
}

impl PlannerField {
    pub const ALL: [PlannerField; 4] = [
        PlannerField::CurrentLocation,
        PlannerField::PickupLocation,
        PlannerField::DropoffLocation,
        PlannerField::CurrentCycleUsed,
    ];

    /// Clave i18n y también id del input
    pub fn key(&self) -> &'static str {
        match self {
            PlannerField::CurrentLocation => "current_location",
            PlannerField::PickupLocation => "pickup_location",
            PlannerField::DropoffLocation => "dropoff_location",
            PlannerField::CurrentCycleUsed => "current_cycle_used",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlannerError {
    Required(PlannerField),
    CycleHoursOutOfRange,
}

impl PlannerError {
    pub fn message(&self, lang: &str) -> String {
        match self {
            PlannerError::Required(field) => {
                format!("{}: {}", t(field.key(), lang), t("error_required", lang))
            }
            PlannerError::CycleHoursOutOfRange => t("error_cycle", lang),
        }
    }
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message("EN"))
    }
}

impl std::error::Error for PlannerError {}

impl PlannerForm {
    pub fn value(&self, field: PlannerField) -> &str {
        match field {
            PlannerField::CurrentLocation => &self.current_location,
            PlannerField::PickupLocation => &self.pickup_location,
            PlannerField::DropoffLocation => &self.dropoff_location,
            PlannerField::CurrentCycleUsed => &self.current_cycle_used,
        }
    }

    pub fn set(&mut self, field: PlannerField, value: String) {
        match field {
            PlannerField::CurrentLocation => self.current_location = value,
            PlannerField::PickupLocation => self.pickup_location = value,
            PlannerField::DropoffLocation => self.dropoff_location = value,
            PlannerField::CurrentCycleUsed => self.current_cycle_used = value,
        }
    }

    /// Validar y convertir al payload del backend
    pub fn validate(&self) -> Result<TripRequest, PlannerError> {
        for field in PlannerField::ALL {
            if self.value(field).trim().is_empty() {
                return Err(PlannerError::Required(field));
            }
        }

        let cycle: f64 = self.current_cycle_used.trim().parse()
            .map_err(|_| PlannerError::CycleHoursOutOfRange)?;
        if !cycle.is_finite() || !(0.0..=MAX_CYCLE_HOURS).contains(&cycle) {
            return Err(PlannerError::CycleHoursOutOfRange);
        }

        Ok(TripRequest {
            current_location: self.current_location.trim().to_string(),
            pickup_location: self.pickup_location.trim().to_string(),
            dropoff_location: self.dropoff_location.trim().to_string(),
            current_cycle_used: cycle,
        })
    }
}

/// ViewModel del planner
pub struct PlannerViewModel;

impl PlannerViewModel {
    /// Validar y lanzar el cálculo. Éxito → navegar a /trip-summary con la respuesta como state
    pub fn submit(state: &AppState) {
        if *state.planner_submitting.borrow() {
            log::warn!("⚠️ [PLANNER] Request ya en curso, ignorando submit duplicado");
            return;
        }

        let lang = state.language.borrow().clone();
        let request = match state.planner_form.borrow().validate() {
            Ok(request) => request,
            Err(e) => {
                log::warn!("⚠️ [PLANNER] Formulario inválido: {}", e);
                *state.planner_error.borrow_mut() = Some(e.message(&lang));
                crate::rerender_app();
                return;
            }
        };

        *state.planner_error.borrow_mut() = None;
        *state.planner_submitting.borrow_mut() = true;
        crate::rerender_app();

        let state_clone = state.clone();
        spawn_local(async move {
            let result = API_CLIENT.plan_trip(&request).await;
            *state_clone.planner_submitting.borrow_mut() = false;

            match result {
                Ok(itinerary) => {
                    log::info!("✅ [PLANNER] Itinerario recibido, navegando a {}", Route::TripSummary.path());
                    if let Err(e) = router::navigate(&state_clone, Route::TripSummary.path(), Some(itinerary)) {
                        log::error!("❌ [PLANNER] Error navegando: {:?}", e);
                    }
                }
                Err(e) => {
                    log::error!("❌ [PLANNER] Error calculando itinerario: {}", e);
                    *state_clone.planner_error.borrow_mut() = Some(e.to_string());
                    crate::rerender_app();
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PlannerForm {
        PlannerForm {
            current_location: " Dallas, TX ".to_string(),
            pickup_location: "Austin, TX".to_string(),
            dropoff_location: "Denver, CO".to_string(),
            current_cycle_used: "12.5".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_request() {
        let request = filled().validate().unwrap();
        assert_eq!(request.current_location, "Dallas, TX");
        assert_eq!(request.current_cycle_used, 12.5);
    }

    #[test]
    fn test_blank_address_is_rejected() {
        let mut form = filled();
        form.set(PlannerField::PickupLocation, "   ".to_string());
        assert_eq!(form.validate(), Err(PlannerError::Required(PlannerField::PickupLocation)));
    }

    #[test]
    fn test_cycle_hours_range() {
        let mut form = filled();
        for bad in ["-1", "70.5", "abc", "NaN"] {
            form.set(PlannerField::CurrentCycleUsed, bad.to_string());
            assert_eq!(form.validate(), Err(PlannerError::CycleHoursOutOfRange), "{}", bad);
        }
        for ok in ["0", "70"] {
            form.set(PlannerField::CurrentCycleUsed, ok.to_string());
            assert!(form.validate().is_ok(), "{}", ok);
        }
    }

    #[test]
    fn test_error_message_is_localized() {
        let err = PlannerError::Required(PlannerField::DropoffLocation);
        assert_eq!(err.message("EN"), "Dropoff location: Required field");
        assert_eq!(err.to_string(), "Dropoff location: Required field");
    }
}
