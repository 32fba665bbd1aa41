// ============================================================================
// TRIP PLANNER PWA - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Formateo, validación y escena del mapa
// - Services: SOLO comunicación API
// - State: Estado global con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod maps;
pub mod router;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;

// Instancia global de la App (un solo hilo: thread_local)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() { log::Level::Info } else { log::Level::Warn };
    wasm_logger::init(Config::new(level));
    log::info!("🚀 Trip Planner - Rust Puro + MVVM");
    log::info!("🌐 [CONFIG] Backend: {}", CONFIG.api_url(""));

    let mut app = App::new()?;
    app.render()?;

    // Listener global de popstate: UNA VEZ, aquí
    router::listen_popstate(app.state())?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| {
        // try_borrow_mut: un re-render pedido durante otro render se ignora
        match app_cell.try_borrow_mut() {
            Ok(mut guard) => {
                if let Some(app) = guard.as_mut() {
                    if let Err(e) = app.render() {
                        log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                    }
                } else {
                    log::warn!("⚠️ [RERENDER] App no está inicializada");
                }
            }
            Err(_) => log::warn!("⚠️ [RERENDER] Render en curso, re-render ignorado"),
        }
    });
}
