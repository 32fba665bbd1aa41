// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Listeners en elementos del DOM: cuando el elemento se destruye (re-render con
// set_inner_html("")), el navegador limpia sus listeners, así que forget() es seguro.
// Listeners globales (window): registrar UNA sola vez (ver router::listen_popstate).
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, HtmlInputElement, MouseEvent};

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para inputs: entrega el valor actual del <input>
pub fn on_input_value<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let input = element.clone();
    let closure = Closure::wrap(Box::new(move |_e: Event| {
        if let Some(input) = input.dyn_ref::<HtmlInputElement>() {
            handler(input.value());
        }
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para submit de formularios (previene la recarga de página)
pub fn on_submit<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        handler();
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para <select>/cambios: entrega el valor vía Reflect (evita feature HtmlSelectElement)
pub fn on_change_value<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let target = element.clone();
    let closure = Closure::wrap(Box::new(move |_e: Event| {
        let value = js_sys::Reflect::get(&target, &JsValue::from_str("value"))
            .ok()
            .and_then(|v| v.as_string());
        if let Some(value) = value {
            handler(value);
        }
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
