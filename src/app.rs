// ============================================================================
// APP - Aplicación principal (raíz #app + estado global)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{get_element_by_id, set_inner_html, append_child};
use crate::maps::{LeafletMapRenderer, MapRenderer};
use crate::router;
use crate::state::app_state::AppState;
use crate::utils::constants::TRIP_MAP_CONTAINER_ID;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación a partir de la URL y el history.state actuales
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        let path = router::current_path();
        state.set_location(&path, router::current_state());
        log::info!("📍 [APP] Ruta inicial: {} → {:?}", path, state.current_route());

        Ok(Self {
            state,
            root: Some(root),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Re-render completo de la vista actual
    pub fn render(&mut self) -> Result<(), JsValue> {
        let Some(root) = &self.root else {
            log::warn!("⚠️ [APP] Sin elemento raíz, render ignorado");
            return Ok(());
        };

        // El mapa de la vista anterior se destruye antes de tirar su contenedor
        if let Err(e) = LeafletMapRenderer::new().clear(TRIP_MAP_CONTAINER_ID) {
            log::warn!("⚠️ [APP] No se pudo liberar el mapa anterior: {}", e);
        }

        set_inner_html(root, "");
        let app_view = render_app(&self.state)?;
        append_child(root, &app_view)?;
        Ok(())
    }
}
