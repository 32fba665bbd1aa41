use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::models::itinerary::{deserialize_lenient_vec, deserialize_numeric};

/// Estado de servicio en el log ELD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    OffDuty,
    Sleeper,
    Driving,
    OnDuty,
}

impl DutyStatus {
    /// Orden de las filas en la hoja de log (de arriba a abajo)
    pub const ROWS: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::Sleeper,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    pub fn row_index(&self) -> usize {
        match self {
            DutyStatus::OffDuty => 0,
            DutyStatus::Sleeper => 1,
            DutyStatus::Driving => 2,
            DutyStatus::OnDuty => 3,
        }
    }

    /// Clave i18n de la etiqueta de fila
    pub fn label_key(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "off_duty",
            DutyStatus::Sleeper => "sleeper",
            DutyStatus::Driving => "driving",
            DutyStatus::OnDuty => "on_duty",
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label_key())
    }
}

/// Tramo del log: estado entre dos horas del día [0, 24]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EldLogEntry {
    pub status: DutyStatus,
    #[serde(alias = "start_hour", deserialize_with = "deserialize_numeric")]
    pub start_hour: f64,
    #[serde(alias = "end_hour", deserialize_with = "deserialize_numeric")]
    pub end_hour: f64,
}

impl EldLogEntry {
    pub fn duration(&self) -> f64 {
        (self.end_hour - self.start_hour).max(0.0)
    }
}

/// Hoja de log de un día
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EldDayLog {
    pub date: NaiveDate,
    /// Tramos ilegibles (estado desconocido, horas inválidas) se descartan
    #[serde(default, alias = "log_entries", deserialize_with = "deserialize_lenient_vec")]
    pub log_entries: Vec<EldLogEntry>,
    #[serde(default, alias = "total_driving_hours", deserialize_with = "deserialize_numeric")]
    pub total_driving_hours: f64,
    #[serde(default, alias = "total_on_duty_hours", deserialize_with = "deserialize_numeric")]
    pub total_on_duty_hours: f64,
    #[serde(default, alias = "total_miles", deserialize_with = "deserialize_numeric")]
    pub total_miles: f64,
}

impl EldDayLog {
    /// Horas registradas en un estado
    pub fn hours_in(&self, status: DutyStatus) -> f64 {
        self.log_entries
            .iter()
            .filter(|e| e.status == status)
            .map(EldLogEntry::duration)
            .sum()
    }

    /// Horas cubiertas por el log (un día completo = 24)
    pub fn covered_hours(&self) -> f64 {
        self.log_entries.iter().map(EldLogEntry::duration).sum()
    }

    /// Entradas ordenadas por hora de inicio
    pub fn sorted_entries(&self) -> Vec<EldLogEntry> {
        let mut entries = self.log_entries.clone();
        entries.sort_by(|a, b| a.start_hour.total_cmp(&b.start_hour));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day() -> EldDayLog {
        serde_json::from_value(json!({
            "date": "2025-03-01",
            "logEntries": [
                { "status": "driving", "startHour": 8.5, "endHour": 14.0 },
                { "status": "on_duty", "startHour": 8.0, "endHour": 8.5 },
                { "status": "off_duty", "startHour": 14.0, "endHour": 24.0 },
                { "status": "off_duty", "startHour": 0.0, "endHour": 8.0 }
            ],
            "totalDrivingHours": 5.5,
            "totalOnDutyHours": 6.0,
            "totalMiles": 302.5
        }))
        .unwrap()
    }

    #[test]
    fn test_hours_per_status() {
        let log = day();
        assert_eq!(log.hours_in(DutyStatus::Driving), 5.5);
        assert_eq!(log.hours_in(DutyStatus::OffDuty), 18.0);
        assert_eq!(log.hours_in(DutyStatus::Sleeper), 0.0);
        assert_eq!(log.covered_hours(), 24.0);
    }

    #[test]
    fn test_sorted_entries() {
        let starts: Vec<f64> = day().sorted_entries().iter().map(|e| e.start_hour).collect();
        assert_eq!(starts, vec![0.0, 8.0, 8.5, 14.0]);
    }

    #[test]
    fn test_status_wire_names() {
        let status: DutyStatus = serde_json::from_value(json!("on_duty")).unwrap();
        assert_eq!(status, DutyStatus::OnDuty);
        assert_eq!(DutyStatus::OffDuty.row_index(), 0);
    }
}
