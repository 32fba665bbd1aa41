// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use gloo_storage::{LocalStorage, Storage};
use crate::router::Route;
use crate::utils::constants::LANGUAGE_PREF_KEY;
use crate::utils::i18n::normalize_language;
use crate::viewmodels::planner_viewmodel::PlannerForm;

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    // Navegación
    pub route: Rc<RefCell<Route>>,
    pub current_path: Rc<RefCell<String>>,
    /// Navigation state de la vista actual (respuesta del backend, opaca)
    pub nav_state: Rc<RefCell<Option<serde_json::Value>>>,

    // Planner
    pub planner_form: Rc<RefCell<PlannerForm>>,
    pub planner_submitting: Rc<RefCell<bool>>,
    pub planner_error: Rc<RefCell<Option<String>>>,

    // Preferencias
    pub language: Rc<RefCell<String>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        let language = LocalStorage::get::<String>(LANGUAGE_PREF_KEY)
            .map(|lang| normalize_language(&lang))
            .unwrap_or_else(|_| normalize_language(""));

        Self {
            route: Rc::new(RefCell::new(Route::Landing)),
            current_path: Rc::new(RefCell::new("/".to_string())),
            nav_state: Rc::new(RefCell::new(None)),
            planner_form: Rc::new(RefCell::new(PlannerForm::default())),
            planner_submitting: Rc::new(RefCell::new(false)),
            planner_error: Rc::new(RefCell::new(None)),
            language: Rc::new(RefCell::new(language)),
        }
    }

    /// Actualizar ruta y navigation state (el state anterior se descarta)
    pub fn set_location(&self, path: &str, nav_state: Option<serde_json::Value>) {
        *self.route.borrow_mut() = Route::from_path(path);
        *self.current_path.borrow_mut() = path.to_string();
        *self.nav_state.borrow_mut() = nav_state;
    }

    /// Establecer language y guardar en localStorage
    pub fn set_language(&self, lang: &str) {
        let lang = normalize_language(lang);
        if let Err(e) = LocalStorage::set(LANGUAGE_PREF_KEY, &lang) {
            log::warn!("⚠️ [STATE] No se pudo guardar el idioma: {}", e);
        }
        *self.language.borrow_mut() = lang;
    }

    pub fn current_route(&self) -> Route {
        *self.route.borrow()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
