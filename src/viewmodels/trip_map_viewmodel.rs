// ============================================================================
// TRIP MAP VIEWMODEL - Itinerario → capas del mapa
// ============================================================================
// SOLO preparación de datos: la escena se serializa y se envía al bridge JS
// ============================================================================

use serde::Serialize;
use crate::config::MapConfig;
use crate::maps::{MapRenderer, MapError};
use crate::models::{Itinerary, LatLng, FuelStop, RestStop, Waypoint};
use crate::utils::constants::{
    ROUTE_TO_PICKUP_COLOR, ROUTE_TO_PICKUP_WEIGHT, ROUTE_TO_PICKUP_DASH,
    ROUTE_TO_DROPOFF_COLOR, ROUTE_TO_DROPOFF_WEIGHT,
};
use crate::utils::i18n::t;

/// Rectángulo mínimo del viewport (grados WGS-84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Rectángulo degenerado alrededor de un punto
    pub fn around(point: LatLng) -> Self {
        Self {
            south: point.lat,
            west: point.lng,
            north: point.lat,
            east: point.lng,
        }
    }

    pub fn extend(&mut self, point: LatLng) {
        self.south = self.south.min(point.lat);
        self.north = self.north.max(point.lat);
        self.west = self.west.min(point.lng);
        self.east = self.east.max(point.lng);
    }

    /// Bounds de un conjunto de puntos (None si está vacío)
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut iter = points.into_iter();
        let mut bounds = Self::around(iter.next()?);
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south && point.lat <= self.north
            && point.lng >= self.west && point.lng <= self.east
    }
}

/// Categoría de marker (cada una con su icono)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Current,
    Pickup,
    Dropoff,
    Fuel,
    Rest,
}

impl MarkerKind {
    pub fn icon(&self) -> &'static str {
        match self {
            MarkerKind::Current => "📍",
            MarkerKind::Pickup => "📦",
            MarkerKind::Dropoff => "🏁",
            MarkerKind::Fuel => "⛽",
            MarkerKind::Rest => "🛏️",
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            MarkerKind::Current => "marker marker-current",
            MarkerKind::Pickup => "marker marker-pickup",
            MarkerKind::Dropoff => "marker marker-dropoff",
            MarkerKind::Fuel => "marker marker-fuel",
            MarkerKind::Rest => "marker marker-rest",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub kind: MarkerKind,
    pub icon: &'static str,
    pub class_name: &'static str,
    pub position: [f64; 2], // [lat, lng]
    pub title: String,
    /// Texto del popup (una línea por '\n')
    pub popup: String,
}

impl MapMarker {
    fn new(kind: MarkerKind, position: LatLng, title: String, popup: String) -> Self {
        Self {
            kind,
            icon: kind.icon(),
            class_name: kind.class_name(),
            position: position.to_pair(),
            title,
            popup,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPolyline {
    pub id: &'static str,
    pub points: Vec<[f64; 2]>,
    pub color: &'static str,
    pub weight: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<&'static str>,
}

/// Escena completa que consume js/trip_map.js
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapScene {
    pub tile_url: String,
    pub attribution: String,
    pub bounds: Bounds,
    pub markers: Vec<MapMarker>,
    pub polylines: Vec<MapPolyline>,
}

impl MapScene {
    pub fn markers_of(&self, kind: MarkerKind) -> impl Iterator<Item = &MapMarker> {
        self.markers.iter().filter(move |m| m.kind == kind)
    }

    pub fn polyline(&self, id: &str) -> Option<&MapPolyline> {
        self.polylines.iter().find(|p| p.id == id)
    }
}

pub const ROUTE_TO_PICKUP_ID: &str = "route-to-pickup";
pub const ROUTE_TO_DROPOFF_ID: &str = "route-to-dropoff";

/// ViewModel del mapa del viaje - SOLO lógica de preparación
pub struct TripMapViewModel;

impl TripMapViewModel {
    /// Construir la escena: bounds, 3 + |fuel| + |rest| markers y hasta 2 polilíneas
    pub fn build_scene(itinerary: &Itinerary, map_config: &MapConfig, lang: &str) -> MapScene {
        let bounds = Bounds::from_points(itinerary.viewport_points())
            .unwrap_or_else(|| Bounds::around(itinerary.current_location.position()));

        let mut markers = vec![
            Self::waypoint_marker(MarkerKind::Current, &itinerary.current_location, &t("current", lang)),
            Self::waypoint_marker(MarkerKind::Pickup, &itinerary.pickup_location, &t("pickup", lang)),
            Self::waypoint_marker(MarkerKind::Dropoff, &itinerary.dropoff_location, &t("dropoff", lang)),
        ];

        for (i, stop) in itinerary.fuel_stops.iter().enumerate() {
            markers.push(MapMarker::new(
                MarkerKind::Fuel,
                stop.position(),
                format!("{} #{}", t("fuel_stop", lang), i + 1),
                Self::fuel_popup(stop, lang),
            ));
        }

        for (i, stop) in itinerary.rest_stops.iter().enumerate() {
            markers.push(MapMarker::new(
                MarkerKind::Rest,
                stop.position(),
                format!("{} #{}", t("rest_stop", lang), i + 1),
                Self::rest_popup(stop, lang),
            ));
        }

        let mut polylines = Vec::new();
        if !itinerary.route_to_pickup.is_empty() {
            polylines.push(MapPolyline {
                id: ROUTE_TO_PICKUP_ID,
                points: itinerary.route_to_pickup.iter().map(LatLng::to_pair).collect(),
                color: ROUTE_TO_PICKUP_COLOR,
                weight: ROUTE_TO_PICKUP_WEIGHT,
                dash_array: Some(ROUTE_TO_PICKUP_DASH),
            });
        }
        if !itinerary.route_to_dropoff.is_empty() {
            polylines.push(MapPolyline {
                id: ROUTE_TO_DROPOFF_ID,
                points: itinerary.route_to_dropoff.iter().map(LatLng::to_pair).collect(),
                color: ROUTE_TO_DROPOFF_COLOR,
                weight: ROUTE_TO_DROPOFF_WEIGHT,
                dash_array: None,
            });
        }

        log::info!("📍 [MAP-VM] Escena: {} markers, {} polilíneas", markers.len(), polylines.len());

        MapScene {
            tile_url: map_config.tile_url_template.clone(),
            attribution: map_config.tile_attribution.clone(),
            bounds,
            markers,
            polylines,
        }
    }

    fn waypoint_marker(kind: MarkerKind, waypoint: &Waypoint, label: &str) -> MapMarker {
        MapMarker::new(
            kind,
            waypoint.position(),
            waypoint.name.clone(),
            format!("{}\n{}", label, waypoint.name),
        )
    }

    /// Popup de combustible: "Fuel stop\nPrice: $3.50"
    pub fn fuel_popup(stop: &FuelStop, lang: &str) -> String {
        format!("{}\n{}: ${:.2}", t("fuel_stop", lang), t("price", lang), stop.price)
    }

    /// Popup de descanso: "Rest stop\nAmenities: wifi, food"
    pub fn rest_popup(stop: &RestStop, lang: &str) -> String {
        format!("{}\n{}: {}", t("rest_stop", lang), t("amenities", lang), stop.amenities_text())
    }

    /// Construir la escena y entregarla al renderizador
    pub fn present<R: MapRenderer>(
        renderer: &mut R,
        container_id: &str,
        itinerary: &Itinerary,
        map_config: &MapConfig,
        lang: &str,
    ) -> Result<MapScene, MapError> {
        let scene = Self::build_scene(itinerary, map_config, lang);
        renderer.render_scene(container_id, &scene)?;
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Waypoint;

    fn waypoint(lat: f64, lng: f64, name: &str) -> Waypoint {
        Waypoint { lat, lng, name: name.to_string() }
    }

    fn itinerary() -> Itinerary {
        Itinerary {
            current_location: waypoint(40.7, -74.0, "New York"),
            pickup_location: waypoint(39.9, -75.1, "Philadelphia"),
            dropoff_location: waypoint(41.8, -87.6, "Chicago"),
            fuel_stops: vec![
                FuelStop { lat: 1.0, lng: 1.0, price: 3.5 },
                FuelStop { lat: 2.0, lng: 2.0, price: 3.9 },
            ],
            rest_stops: vec![RestStop {
                lat: 41.0,
                lng: -81.5,
                amenities: vec!["wifi".to_string(), "food".to_string()],
            }],
            route_to_pickup: vec![LatLng::new(40.7, -74.0), LatLng::new(39.9, -75.1)],
            route_to_dropoff: vec![],
            total_miles: 123.456,
            total_duration: 5.0,
            schedule: vec![],
            eld_logs: vec![],
        }
    }

    #[test]
    fn test_marker_count_is_three_plus_stops() {
        let it = itinerary();
        let scene = TripMapViewModel::build_scene(&it, &MapConfig::default(), "EN");
        assert_eq!(scene.markers.len(), 3 + it.fuel_stops.len() + it.rest_stops.len());
        assert_eq!(scene.markers_of(MarkerKind::Current).count(), 1);
        assert_eq!(scene.markers_of(MarkerKind::Pickup).count(), 1);
        assert_eq!(scene.markers_of(MarkerKind::Dropoff).count(), 1);
    }

    #[test]
    fn test_bounds_contain_every_viewport_point() {
        let it = itinerary();
        let scene = TripMapViewModel::build_scene(&it, &MapConfig::default(), "EN");
        for point in it.viewport_points() {
            assert!(scene.bounds.contains(point), "{:?} outside {:?}", point, scene.bounds);
        }
        // Rectángulo mínimo: los extremos coinciden con los puntos
        assert_eq!(scene.bounds.south, 1.0);
        assert_eq!(scene.bounds.north, 41.8);
        assert_eq!(scene.bounds.west, -87.6);
        assert_eq!(scene.bounds.east, 2.0);
    }

    #[test]
    fn test_empty_stops_contribute_nothing_to_bounds() {
        let mut it = itinerary();
        it.fuel_stops.clear();
        it.rest_stops.clear();
        let scene = TripMapViewModel::build_scene(&it, &MapConfig::default(), "EN");
        assert_eq!(scene.markers.len(), 3);
        assert_eq!(scene.bounds.south, 39.9);
        assert_eq!(scene.bounds.east, -74.0);
    }

    #[test]
    fn test_polylines_rendered_only_when_non_empty() {
        let mut it = itinerary();
        let scene = TripMapViewModel::build_scene(&it, &MapConfig::default(), "EN");
        let to_pickup = scene.polyline(ROUTE_TO_PICKUP_ID).unwrap();
        assert_eq!(to_pickup.dash_array, Some(ROUTE_TO_PICKUP_DASH));
        assert!(scene.polyline(ROUTE_TO_DROPOFF_ID).is_none());

        it.route_to_pickup.clear();
        it.route_to_dropoff = vec![LatLng::new(39.9, -75.1)];
        let scene = TripMapViewModel::build_scene(&it, &MapConfig::default(), "EN");
        assert!(scene.polyline(ROUTE_TO_PICKUP_ID).is_none());
        let to_dropoff = scene.polyline(ROUTE_TO_DROPOFF_ID).unwrap();
        assert!(to_dropoff.dash_array.is_none());
        assert!(to_dropoff.weight > ROUTE_TO_PICKUP_WEIGHT);
    }

    #[test]
    fn test_each_fuel_marker_shows_its_own_price() {
        let scene = TripMapViewModel::build_scene(&itinerary(), &MapConfig::default(), "EN");
        let popups: Vec<&str> = scene.markers_of(MarkerKind::Fuel).map(|m| m.popup.as_str()).collect();
        assert_eq!(popups.len(), 2);
        assert!(popups[0].contains("$3.50"));
        assert!(popups[1].contains("$3.90"));
    }

    #[test]
    fn test_rest_popup_joins_amenities() {
        let scene = TripMapViewModel::build_scene(&itinerary(), &MapConfig::default(), "EN");
        let rest = scene.markers_of(MarkerKind::Rest).next().unwrap();
        assert_eq!(rest.popup, "Rest stop\nAmenities: wifi, food");
    }

    #[test]
    fn test_marker_kinds_have_distinct_icons() {
        let kinds = [MarkerKind::Current, MarkerKind::Pickup, MarkerKind::Dropoff, MarkerKind::Fuel, MarkerKind::Rest];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.icon(), b.icon());
            }
        }
    }

    #[test]
    fn test_scene_serializes_for_bridge() {
        let scene = TripMapViewModel::build_scene(&itinerary(), &MapConfig::default(), "EN");
        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["markers"][3]["kind"], "fuel");
        assert_eq!(json["polylines"][0]["dashArray"], "10, 10");
        assert!(json["bounds"]["south"].is_number());
    }

    struct RecordingRenderer {
        rendered: Vec<(String, usize)>,
    }

    impl MapRenderer for RecordingRenderer {
        fn render_scene(&mut self, container_id: &str, scene: &MapScene) -> Result<(), MapError> {
            self.rendered.push((container_id.to_string(), scene.markers.len()));
            Ok(())
        }

        fn clear(&mut self, _container_id: &str) -> Result<(), MapError> {
            self.rendered.clear();
            Ok(())
        }
    }

    #[test]
    fn test_present_hands_scene_to_renderer() {
        let mut renderer = RecordingRenderer { rendered: Vec::new() };
        let scene = TripMapViewModel::present(&mut renderer, "trip-map", &itinerary(), &MapConfig::default(), "EN").unwrap();
        assert_eq!(renderer.rendered, vec![("trip-map".to_string(), scene.markers.len())]);
    }
}
