// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Idiomas soportados (EN por defecto)
pub const LANGUAGES: [&str; 2] = ["EN", "ES"];

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "ES" => {
            // Shell
            translations.insert("app_title", "Planificador de viajes");
            translations.insert("nav_home", "Inicio");
            translations.insert("nav_planner", "Planificar");
            translations.insert("language", "Idioma");

            // Landing
            translations.insert("landing_title", "Planifica tu próximo viaje");
            translations.insert("landing_description", "Calcula la ruta, las paradas de combustible y los descansos obligatorios de tu carga.");
            translations.insert("landing_cta", "Empezar a planificar");

            // Planner
            translations.insert("planner_title", "Nuevo viaje");
            translations.insert("current_location", "Ubicación actual");
            translations.insert("pickup_location", "Lugar de recogida");
            translations.insert("dropoff_location", "Lugar de entrega");
            translations.insert("current_cycle_used", "Horas usadas del ciclo (0-70)");
            translations.insert("submit", "Calcular itinerario");
            translations.insert("submitting", "Calculando ruta...");
            translations.insert("error_required", "Campo obligatorio");
            translations.insert("error_cycle", "Las horas del ciclo deben estar entre 0 y 70");

            // Trip summary
            translations.insert("trip_summary_title", "Resumen del viaje");
            translations.insert("miles", "millas");
            translations.insert("hours", "horas");
            translations.insert("current", "Ubicación actual");
            translations.insert("pickup", "Recogida");
            translations.insert("dropoff", "Entrega");
            translations.insert("fuel_stop", "Parada de combustible");
            translations.insert("rest_stop", "Parada de descanso");
            translations.insert("fuel_stops", "Paradas de combustible");
            translations.insert("rest_stops", "Paradas de descanso");
            translations.insert("price", "Precio");
            translations.insert("amenities", "Servicios");
            translations.insert("missing_itinerary", "No hay datos de itinerario");
            translations.insert("missing_itinerary_hint", "Planifica un viaje para ver su resumen.");

            // Schedule / ELD
            translations.insert("schedule_title", "Paradas programadas");
            translations.insert("arrival", "Llegada");
            translations.insert("departure", "Salida");
            translations.insert("duration", "Duración");
            translations.insert("kind", "Tipo");
            translations.insert("eld_title", "Logs ELD diarios");
            translations.insert("off_duty", "Fuera de servicio");
            translations.insert("sleeper", "Litera");
            translations.insert("driving", "Conduciendo");
            translations.insert("on_duty", "En servicio");
            translations.insert("total_driving", "Conducción");
            translations.insert("total_on_duty", "En servicio");
            translations.insert("total_miles", "Millas");

            // Not found
            translations.insert("not_found_title", "Página no encontrada");
            translations.insert("not_found_text", "No existe ninguna vista para");
            translations.insert("back_home", "Volver al inicio");
        }
        _ => {
            // Shell
            translations.insert("app_title", "Trip Planner");
            translations.insert("nav_home", "Home");
            translations.insert("nav_planner", "Plan a trip");
            translations.insert("language", "Language");

            // Landing
            translations.insert("landing_title", "Plan your next haul");
            translations.insert("landing_description", "Compute the route, fuel stops and mandatory rest breaks for your load.");
            translations.insert("landing_cta", "Start planning");

            // Planner
            translations.insert("planner_title", "New trip");
            translations.insert("current_location", "Current location");
            translations.insert("pickup_location", "Pickup location");
            translations.insert("dropoff_location", "Dropoff location");
            translations.insert("current_cycle_used", "Current cycle used (0-70 hrs)");
            translations.insert("submit", "Compute itinerary");
            translations.insert("submitting", "Computing route...");
            translations.insert("error_required", "Required field");
            translations.insert("error_cycle", "Cycle hours must be between 0 and 70");

            // Trip summary
            translations.insert("trip_summary_title", "Trip summary");
            translations.insert("miles", "miles");
            translations.insert("hours", "hours");
            translations.insert("current", "Current location");
            translations.insert("pickup", "Pickup");
            translations.insert("dropoff", "Dropoff");
            translations.insert("fuel_stop", "Fuel stop");
            translations.insert("rest_stop", "Rest stop");
            translations.insert("fuel_stops", "Fuel stops");
            translations.insert("rest_stops", "Rest stops");
            translations.insert("price", "Price");
            translations.insert("amenities", "Amenities");
            translations.insert("missing_itinerary", "No itinerary data");
            translations.insert("missing_itinerary_hint", "Plan a trip to see its summary.");

            // Schedule / ELD
            translations.insert("schedule_title", "Scheduled stops");
            translations.insert("arrival", "Arrival");
            translations.insert("departure", "Departure");
            translations.insert("duration", "Duration");
            translations.insert("kind", "Kind");
            translations.insert("eld_title", "Daily ELD logs");
            translations.insert("off_duty", "Off duty");
            translations.insert("sleeper", "Sleeper berth");
            translations.insert("driving", "Driving");
            translations.insert("on_duty", "On duty");
            translations.insert("total_driving", "Driving");
            translations.insert("total_on_duty", "On duty");
            translations.insert("total_miles", "Miles");

            // Not found
            translations.insert("not_found_title", "Page not found");
            translations.insert("not_found_text", "There is no view for");
            translations.insert("back_home", "Back to home");
        }
    }

    translations
}

/// Traducir una clave; si no existe se devuelve la clave tal cual
pub fn t(key: &str, lang: &str) -> String {
    get_translations(lang)
        .get(key)
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Normalizar un código de idioma a uno soportado
pub fn normalize_language(lang: &str) -> String {
    let upper = lang.trim().to_uppercase();
    if LANGUAGES.contains(&upper.as_str()) {
        upper
    } else {
        LANGUAGES[0].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_default_to_english() {
        assert_eq!(t("miles", "EN"), "miles");
        assert_eq!(t("hours", "fr"), "hours");
        assert_eq!(t("miles", "es"), "millas");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t("does_not_exist", "EN"), "does_not_exist");
    }

    #[test]
    fn test_languages_share_keys() {
        let en = get_translations("EN");
        let es = get_translations("ES");
        for key in en.keys() {
            assert!(es.contains_key(key), "missing ES translation for {}", key);
        }
    }

    #[test]
    fn test_normalize_language() {
        assert_eq!(normalize_language("es"), "ES");
        assert_eq!(normalize_language("DE"), "EN");
    }
}
