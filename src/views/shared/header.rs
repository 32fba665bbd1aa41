// ============================================================================
// HEADER - Título, navegación y selector de idioma
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, on_change_value};
use crate::router::Route;
use crate::state::app_state::AppState;
use crate::utils::i18n::{t, LANGUAGES};
use super::link::render_link;

pub fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language.borrow().clone();
    let route = state.current_route();

    let title = ElementBuilder::new("h1")?
        .class("app-title")
        .text(&format!("🚚 {}", t("app_title", &lang)))
        .build();

    let nav_class = |target: Route| {
        if route == target { "nav-link active" } else { "nav-link" }
    };

    let nav = ElementBuilder::new("nav")?
        .class("app-nav")
        .child(render_link(state, Route::Landing.path(), &t("nav_home", &lang), nav_class(Route::Landing))?)?
        .child(render_link(state, Route::Planner.path(), &t("nav_planner", &lang), nav_class(Route::Planner))?)?
        .child(render_language_select(state, &lang)?)?
        .build();

    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(title)?
        .child(nav)?
        .build())
}

fn render_language_select(state: &AppState, lang: &str) -> Result<Element, JsValue> {
    let select = ElementBuilder::new("select")?
        .class("language-select")
        .attr("aria-label", &t("language", lang))?
        .build();

    for code in LANGUAGES {
        let mut option = ElementBuilder::new("option")?
            .attr("value", code)?
            .text(code);
        if code == lang {
            option = option.attr("selected", "selected")?;
        }
        select.append_child(&option.build())?;
    }

    let state = state.clone();
    on_change_value(&select, move |value| {
        log::info!("🌐 [HEADER] Idioma → {}", value);
        state.set_language(&value);
        crate::rerender_app();
    })?;

    Ok(select)
}
