// ============================================================================
// LEAFLET FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para funciones JS de js/trip_map.js - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Dibuja la escena (tiles, markers, polilíneas, bounds) en el contenedor
    #[wasm_bindgen(catch, js_name = renderTripMap)]
    pub fn render_trip_map(container_id: &str, scene_json: &str) -> Result<(), JsValue>;

    /// Destruye la instancia de Leaflet asociada al contenedor (si existe)
    #[wasm_bindgen(catch, js_name = destroyTripMap)]
    pub fn destroy_trip_map(container_id: &str) -> Result<(), JsValue>;
}
