// ============================================================================
// LANDING VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::router::Route;
use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::views::shared::render_link;

pub fn render_landing(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language.borrow().clone();

    Ok(ElementBuilder::new("section")?
        .class("landing")
        .child(ElementBuilder::new("h2")?.class("landing-title").text(&t("landing_title", &lang)).build())?
        .child(ElementBuilder::new("p")?.class("landing-description").text(&t("landing_description", &lang)).build())?
        .child(render_link(state, Route::Planner.path(), &t("landing_cta", &lang), "btn btn-primary")?)?
        .build())
}
