// ============================================================================
// NOT FOUND VIEW - Cualquier path sin vista registrada
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::router::Route;
use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::views::shared::render_link;

pub fn render_not_found(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language.borrow().clone();
    let path = state.current_path.borrow().clone();
    log::warn!("⚠️ [ROUTER] Sin vista para {}", path);

    Ok(ElementBuilder::new("section")?
        .class("not-found")
        .child(ElementBuilder::new("h2")?.text(&t("not_found_title", &lang)).build())?
        .child(ElementBuilder::new("p")?.text(&t("not_found_text", &lang)).build())?
        .child(ElementBuilder::new("code")?.class("not-found-path").text(&path).build())?
        .child(render_link(state, Route::Landing.path(), &t("back_home", &lang), "btn")?)?
        .build())
}
