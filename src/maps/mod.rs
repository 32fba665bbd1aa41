// Módulo de mapas: trait común + implementación web (Leaflet)

pub mod leaflet;

pub use leaflet::LeafletMapRenderer;

use std::fmt;
use crate::viewmodels::trip_map_viewmodel::MapScene;

/// Trait común para renderizadores de mapas
pub trait MapRenderer {
    /// Dibujar una escena completa (reemplaza lo que hubiera en el contenedor)
    fn render_scene(&mut self, container_id: &str, scene: &MapScene) -> Result<(), MapError>;

    /// Liberar el mapa del contenedor
    fn clear(&mut self, container_id: &str) -> Result<(), MapError>;
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    Serialization(String),
    Bridge(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Serialization(msg) => write!(f, "Scene serialization error: {}", msg),
            MapError::Bridge(msg) => write!(f, "Map bridge error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}
