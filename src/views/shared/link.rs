// ============================================================================
// LINK - Enlace interno (pushState, sin recargar la página)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};
use crate::dom::{ElementBuilder, on_click};
use crate::router;
use crate::state::app_state::AppState;

/// Renderizar un <a> que navega con el router
pub fn render_link(state: &AppState, path: &str, text: &str, class: &str) -> Result<Element, JsValue> {
    let link = ElementBuilder::new("a")?
        .class(class)
        .attr("href", path)?
        .text(text)
        .build();

    let state = state.clone();
    let path = path.to_string();
    on_click(&link, move |e: MouseEvent| {
        // Ctrl/Cmd+click: dejar que el navegador abra otra pestaña
        if e.ctrl_key() || e.meta_key() {
            return;
        }
        e.prevent_default();
        if let Err(err) = router::navigate(&state, &path, None) {
            log::error!("❌ [LINK] Error navegando a {}: {:?}", path, err);
        }
    })?;

    Ok(link)
}
