// ============================================================================
// TRIP SUMMARY VIEW - Header + mapa del itinerario + paradas + logs ELD
// ============================================================================
// El itinerario llega como navigation state. Si falta o no se puede leer se
// muestra un aviso explícito en lugar del mapa.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;
use crate::config::CONFIG;
use crate::dom::{ElementBuilder, append_child};
use crate::maps::LeafletMapRenderer;
use crate::models::{EldDayLog, Itinerary, ScheduledStop};
use crate::router::Route;
use crate::state::app_state::AppState;
use crate::utils::constants::TRIP_MAP_CONTAINER_ID;
use crate::utils::i18n::t;
use crate::viewmodels::{TripMapViewModel, TripSummaryViewModel};
use crate::views::eld_log::render_eld_log;
use crate::views::shared::render_link;

pub fn render_trip_summary(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language.borrow().clone();

    let itinerary = match Itinerary::from_state(state.nav_state.borrow().as_ref()) {
        Ok(itinerary) => itinerary,
        Err(e) => {
            log::error!("❌ [TRIP] Itinerario no disponible: {}", e);
            return render_missing_itinerary(state, &lang);
        }
    };

    let section = ElementBuilder::new("section")?
        .class("trip-summary")
        .child(render_summary_header(&itinerary, &lang)?)?
        .child(ElementBuilder::new("div")?.id(TRIP_MAP_CONTAINER_ID)?.class("trip-map").build())?
        .build();

    if !itinerary.schedule.is_empty() {
        append_child(&section, &render_schedule(&itinerary.schedule, &lang)?)?;
    }
    if !itinerary.eld_logs.is_empty() {
        append_child(&section, &render_eld_logs(&itinerary.eld_logs, &lang)?)?;
    }

    // El contenedor tiene que estar en el documento antes de crear el mapa:
    // App::render lo inserta al volver de aquí
    Timeout::new(0, move || {
        let mut renderer = LeafletMapRenderer::new();
        match TripMapViewModel::present(&mut renderer, TRIP_MAP_CONTAINER_ID, &itinerary, &CONFIG.map_config, &lang) {
            Ok(scene) => log::info!("🗺️ [TRIP] Mapa dibujado: {} markers", scene.markers.len()),
            Err(e) => log::error!("❌ [TRIP] Error dibujando mapa: {}", e),
        }
    })
    .forget();

    Ok(section)
}

fn render_summary_header(itinerary: &Itinerary, lang: &str) -> Result<Element, JsValue> {
    let summary = TripSummaryViewModel::summarize(itinerary, lang);

    let stat = |icon: &str, text: &str| -> Result<Element, JsValue> {
        Ok(ElementBuilder::new("span")?
            .class("trip-stat")
            .text(&format!("{} {}", icon, text))
            .build())
    };

    Ok(ElementBuilder::new("header")?
        .class("trip-header")
        .child(ElementBuilder::new("h2")?.text(&t("trip_summary_title", lang)).build())?
        .child(stat("🛣️", &summary.distance_text)?)?
        .child(stat("⏱️", &summary.duration_text)?)?
        .child(stat("📦", &format!("{}: {}", t("pickup", lang), summary.pickup_name))?)?
        .child(stat("🏁", &format!("{}: {}", t("dropoff", lang), summary.dropoff_name))?)?
        .child(stat("🛑", &summary.stops_text)?)?
        .build())
}

fn render_schedule(stops: &[ScheduledStop], lang: &str) -> Result<Element, JsValue> {
    let mut head_row = ElementBuilder::new("tr")?;
    for key in ["kind", "arrival", "departure", "duration"] {
        head_row = head_row.child(ElementBuilder::new("th")?.text(&t(key, lang)).build())?;
    }

    let tbody = ElementBuilder::new("tbody")?.build();
    for row in TripSummaryViewModel::schedule_rows(stops, lang) {
        let tr = ElementBuilder::new("tr")?
            .child(ElementBuilder::new("td")?.text(&row.kind_label).build())?
            .child(ElementBuilder::new("td")?.text(&row.arrival).build())?
            .child(ElementBuilder::new("td")?.text(&row.departure).build())?
            .child(ElementBuilder::new("td")?.text(&row.duration).build())?
            .build();
        tbody.append_child(&tr)?;
    }

    let table = ElementBuilder::new("table")?
        .class("schedule-table")
        .child(ElementBuilder::new("thead")?.child(head_row.build())?.build())?
        .child(tbody)?
        .build();

    Ok(ElementBuilder::new("section")?
        .class("trip-schedule")
        .child(ElementBuilder::new("h3")?.text(&t("schedule_title", lang)).build())?
        .child(table)?
        .build())
}

fn render_eld_logs(logs: &[EldDayLog], lang: &str) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("section")?
        .class("trip-eld-logs")
        .child(ElementBuilder::new("h3")?.text(&t("eld_title", lang)).build())?
        .build();

    for log in logs {
        append_child(&container, &render_eld_log(log, lang)?)?;
    }
    Ok(container)
}

fn render_missing_itinerary(state: &AppState, lang: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("section")?
        .class("trip-summary missing")
        .child(ElementBuilder::new("h2")?.text(&format!("⚠️ {}", t("missing_itinerary", lang))).build())?
        .child(ElementBuilder::new("p")?.text(&t("missing_itinerary_hint", lang)).build())?
        .child(render_link(state, Route::Planner.path(), &t("nav_planner", lang), "btn btn-primary")?)?
        .build())
}
