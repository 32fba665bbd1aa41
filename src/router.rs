// ============================================================================
// ROUTER - Path → vista (dispatch puro, sin guards ni redirects)
// ============================================================================
// El navigation state viaja en history.state como string JSON
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use crate::state::app_state::AppState;

/// Vistas registradas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Planner,
    TripSummary,
    NotFound,
}

impl Route {
    /// Resolver un path ("/planner", "trip-summary", "/trip-summary/?x=1", ...)
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        match path.trim_matches('/') {
            "" => Route::Landing,
            "planner" => Route::Planner,
            "trip-summary" => Route::TripSummary,
            _ => Route::NotFound,
        }
    }

    /// Path canónico de la vista
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Planner => "/planner",
            Route::TripSummary => "/trip-summary",
            Route::NotFound => "/404",
        }
    }
}

/// Path actual (window.location.pathname)
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Navigation state de la entrada actual del historial
pub fn current_state() -> Option<serde_json::Value> {
    let history = web_sys::window()?.history().ok()?;
    let raw = history.state().ok()?.as_string()?;
    decode_state(&raw)
}

fn decode_state(raw: &str) -> Option<serde_json::Value> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ [ROUTER] Navigation state ilegible: {}", e);
            None
        }
    }
}

/// Navegar con pushState (sin recargar) y re-renderizar
pub fn navigate(state: &AppState, path: &str, nav_state: Option<serde_json::Value>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let history = window.history()?;

    let js_state = match &nav_state {
        Some(value) => JsValue::from_str(&value.to_string()),
        None => JsValue::NULL,
    };
    history.push_state_with_url(&js_state, "", Some(path))?;

    log::info!("🧭 [ROUTER] {} → {:?}", path, Route::from_path(path));
    state.set_location(path, nav_state);
    crate::rerender_app();
    Ok(())
}

/// Escuchar popstate (back/forward). Solo se registra UNA VEZ en init()
pub fn listen_popstate(state: &AppState) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let state = state.clone();
    let closure = Closure::wrap(Box::new(move |_e: web_sys::PopStateEvent| {
        let path = current_path();
        log::info!("🔙 [ROUTER] popstate → {}", path);
        state.set_location(&path, current_state());
        crate::rerender_app();
    }) as Box<dyn FnMut(web_sys::PopStateEvent)>);

    window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    // Listener global registrado una sola vez: forget() no acumula closures
    closure.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_paths() {
        assert_eq!(Route::from_path("/"), Route::Landing);
        assert_eq!(Route::from_path(""), Route::Landing);
        assert_eq!(Route::from_path("/planner"), Route::Planner);
        assert_eq!(Route::from_path("/trip-summary"), Route::TripSummary);
        assert_eq!(Route::from_path("trip-summary"), Route::TripSummary);
    }

    #[test]
    fn test_trailing_slash_query_and_hash() {
        assert_eq!(Route::from_path("/planner/"), Route::Planner);
        assert_eq!(Route::from_path("/trip-summary?ref=mail"), Route::TripSummary);
        assert_eq!(Route::from_path("/#top"), Route::Landing);
    }

    #[test]
    fn test_unmatched_path_is_not_found() {
        assert_eq!(Route::from_path("/does-not-exist"), Route::NotFound);
        assert_eq!(Route::from_path("/planner/extra"), Route::NotFound);
        assert_eq!(Route::from_path("/Planner"), Route::NotFound);
    }

    #[test]
    fn test_canonical_paths_round_trip() {
        for route in [Route::Landing, Route::Planner, Route::TripSummary] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_decode_state() {
        assert_eq!(decode_state("{\"a\":1}"), Some(serde_json::json!({ "a": 1 })));
        assert_eq!(decode_state("not json"), None);
    }
}
