use wasm_bindgen::JsValue;
use crate::utils::leaflet_ffi;
use crate::viewmodels::trip_map_viewmodel::MapScene;
use super::{MapRenderer, MapError};

/// Renderizador de mapas para web usando Leaflet (via js/trip_map.js)
#[derive(Default)]
pub struct LeafletMapRenderer;

impl LeafletMapRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn bridge_error(e: JsValue) -> MapError {
    MapError::Bridge(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

impl MapRenderer for LeafletMapRenderer {
    fn render_scene(&mut self, container_id: &str, scene: &MapScene) -> Result<(), MapError> {
        let json = serde_json::to_string(scene)
            .map_err(|e| MapError::Serialization(e.to_string()))?;

        log::info!("📤 [MAP] Escena generada ({} bytes): {} markers, {} polilíneas",
                   json.len(), scene.markers.len(), scene.polylines.len());

        leaflet_ffi::render_trip_map(container_id, &json).map_err(bridge_error)
    }

    fn clear(&mut self, container_id: &str) -> Result<(), MapError> {
        leaflet_ffi::destroy_trip_map(container_id).map_err(bridge_error)
    }
}
