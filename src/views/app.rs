// ============================================================================
// APP VIEW - Shell: header + vista de la ruta actual
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::router::Route;
use crate::state::app_state::AppState;
use crate::views::{render_landing, render_not_found, render_planner, render_trip_summary};
use crate::views::shared::render_header;

/// Renderizar la app completa para la ruta actual
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let route = state.current_route();
    log::info!("🎨 [RENDER] {:?}", route);

    let content = match route {
        Route::Landing => render_landing(state)?,
        Route::Planner => render_planner(state)?,
        Route::TripSummary => render_trip_summary(state)?,
        Route::NotFound => render_not_found(state)?,
    };

    let main = ElementBuilder::new("main")?
        .class("app-content")
        .child(content)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("app-shell")
        .child(render_header(state)?)?
        .child(main)?
        .build())
}
