// ============================================================================
// PLANNER VIEW - Formulario de viaje
// ============================================================================
// Los valores viven en state.planner_form: un re-render (error, submitting)
// no borra lo que el usuario escribió
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, on_input_value, on_submit};
use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::{PlannerField, PlannerViewModel};

pub fn render_planner(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language.borrow().clone();
    let submitting = *state.planner_submitting.borrow();

    let form = ElementBuilder::new("form")?
        .class("planner-form")
        .attr("novalidate", "novalidate")?
        .build();

    for field in PlannerField::ALL {
        append_child(&form, &render_field(state, field, &lang, submitting)?)?;
    }

    if let Some(error) = state.planner_error.borrow().as_ref() {
        let error_el = ElementBuilder::new("div")?
            .class("form-error")
            .attr("role", "alert")?
            .text(&format!("❌ {}", error))
            .build();
        form.append_child(&error_el)?;
    }

    let mut button = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?;
    if submitting {
        button = button
            .attr("disabled", "disabled")?
            .text(&format!("⏳ {}", t("submitting", &lang)));
    } else {
        button = button.text(&t("submit", &lang));
    }
    form.append_child(&button.build())?;

    {
        let state = state.clone();
        on_submit(&form, move || PlannerViewModel::submit(&state))?;
    }

    Ok(ElementBuilder::new("section")?
        .class("planner")
        .child(ElementBuilder::new("h2")?.text(&t("planner_title", &lang)).build())?
        .child(form)?
        .build())
}

fn render_field(state: &AppState, field: PlannerField, lang: &str, disabled: bool) -> Result<Element, JsValue> {
    let id = field.key();
    let value = state.planner_form.borrow().value(field).to_string();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(&t(id, lang))
        .build();

    let mut input = ElementBuilder::new("input")?
        .id(id)?
        .class("form-input")
        .attr("name", id)?
        .attr("value", &value)?;

    input = match field {
        PlannerField::CurrentCycleUsed => input
            .attr("type", "number")?
            .attr("min", "0")?
            .attr("max", "70")?
            .attr("step", "0.5")?,
        _ => input
            .attr("type", "text")?
            .attr("autocomplete", "off")?,
    };
    if disabled {
        input = input.attr("disabled", "disabled")?;
    }
    let input = input.build();

    {
        let state = state.clone();
        on_input_value(&input, move |value| {
            state.planner_form.borrow_mut().set(field, value);
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("form-field")
        .child(label)?
        .child(input)?
        .build())
}
