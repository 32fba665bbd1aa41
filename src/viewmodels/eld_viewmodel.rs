// ============================================================================
// ELD VIEWMODEL - Geometría de la hoja de log diaria (grid 24h x 4 estados)
// ============================================================================

use crate::models::{DutyStatus, EldDayLog};
use crate::utils::i18n::t;

pub const CHART_WIDTH: f64 = 960.0;
pub const CHART_LEFT: f64 = 120.0;
pub const CHART_RIGHT: f64 = 60.0;
pub const CHART_TOP: f64 = 30.0;
pub const ROW_HEIGHT: f64 = 40.0;
pub const HOURS_PER_DAY: f64 = 24.0;

/// Fila del grid (un estado de servicio)
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub status: DutyStatus,
    pub label: String,
    pub top: f64,
    pub center_y: f64,
    /// Horas totales en este estado ("10.00")
    pub hours_text: String,
}

/// Hoja de log lista para dibujar en SVG
#[derive(Debug, Clone, PartialEq)]
pub struct EldChart {
    pub date_label: String,
    pub width: f64,
    pub height: f64,
    pub rows: Vec<ChartRow>,
    /// (hora, x) de 0 a 24
    pub hour_ticks: Vec<(u32, f64)>,
    /// Línea escalonada del estado a lo largo del día
    pub path: Vec<(f64, f64)>,
    pub totals: Vec<(String, String)>,
}

impl EldChart {
    /// Atributo `points` de un <polyline>
    pub fn points_attr(&self) -> String {
        self.path
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub struct EldViewModel;

impl EldViewModel {
    pub fn hour_step() -> f64 {
        (CHART_WIDTH - CHART_LEFT - CHART_RIGHT) / HOURS_PER_DAY
    }

    pub fn x_for_hour(hour: f64) -> f64 {
        CHART_LEFT + hour.clamp(0.0, HOURS_PER_DAY) * Self::hour_step()
    }

    pub fn y_for_status(status: DutyStatus) -> f64 {
        CHART_TOP + status.row_index() as f64 * ROW_HEIGHT + ROW_HEIGHT / 2.0
    }

    pub fn build_chart(log: &EldDayLog, lang: &str) -> EldChart {
        let rows = DutyStatus::ROWS
            .iter()
            .map(|status| ChartRow {
                status: *status,
                label: t(status.label_key(), lang),
                top: CHART_TOP + status.row_index() as f64 * ROW_HEIGHT,
                center_y: Self::y_for_status(*status),
                hours_text: format!("{:.2}", log.hours_in(*status)),
            })
            .collect();

        let hour_ticks = (0..=24u32)
            .map(|h| (h, Self::x_for_hour(h as f64)))
            .collect();

        let totals = vec![
            (t("total_driving", lang), format!("{:.2} h", log.total_driving_hours)),
            (t("total_on_duty", lang), format!("{:.2} h", log.total_on_duty_hours)),
            (t("total_miles", lang), format!("{:.2}", log.total_miles)),
        ];

        EldChart {
            date_label: log.date.format("%Y-%m-%d").to_string(),
            width: CHART_WIDTH,
            height: CHART_TOP + DutyStatus::ROWS.len() as f64 * ROW_HEIGHT + 10.0,
            rows,
            hour_ticks,
            path: Self::step_path(log),
            totals,
        }
    }

    /// Línea escalonada: horizontal durante cada tramo, vertical en cada cambio
    /// de estado, y el último estado se prolonga hasta la hora 24
    pub fn step_path(log: &EldDayLog) -> Vec<(f64, f64)> {
        let mut points: Vec<(f64, f64)> = Vec::new();

        for entry in log.sorted_entries() {
            let y = Self::y_for_status(entry.status);
            let x_start = Self::x_for_hour(entry.start_hour);
            let x_end = Self::x_for_hour(entry.end_hour);

            if let Some(&(last_x, last_y)) = points.last() {
                if x_start > last_x {
                    // Hueco entre tramos: se mantiene el estado anterior
                    push_point(&mut points, (x_start, last_y));
                }
                if y != last_y {
                    push_point(&mut points, (x_start.max(last_x), y));
                }
            } else {
                push_point(&mut points, (x_start, y));
            }
            push_point(&mut points, (x_end.max(x_start), y));
        }

        let day_end = Self::x_for_hour(HOURS_PER_DAY);
        if let Some(&(last_x, last_y)) = points.last() {
            if last_x < day_end {
                push_point(&mut points, (day_end, last_y));
            }
        }

        points
    }
}

fn push_point(points: &mut Vec<(f64, f64)>, point: (f64, f64)) {
    if points.last() != Some(&point) {
        points.push(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn log(entries: serde_json::Value) -> EldDayLog {
        serde_json::from_value(json!({
            "date": "2025-03-02",
            "logEntries": entries,
            "totalDrivingHours": 11.0,
            "totalOnDutyHours": 12.5,
            "totalMiles": 605.0
        }))
        .unwrap()
    }

    #[test]
    fn test_path_extends_to_end_of_day() {
        let day = log(json!([
            { "status": "on_duty", "startHour": 6.0, "endHour": 6.5 },
            { "status": "driving", "startHour": 6.5, "endHour": 17.5 }
        ]));
        let path = EldViewModel::step_path(&day);
        let (last_x, last_y) = *path.last().unwrap();
        assert_eq!(last_x, EldViewModel::x_for_hour(24.0));
        assert_eq!(last_y, EldViewModel::y_for_status(DutyStatus::Driving));
        assert_eq!(path[0], (EldViewModel::x_for_hour(6.0), EldViewModel::y_for_status(DutyStatus::OnDuty)));
    }

    #[test]
    fn test_path_has_vertical_step_on_status_change() {
        let day = log(json!([
            { "status": "off_duty", "startHour": 0.0, "endHour": 8.0 },
            { "status": "driving", "startHour": 8.0, "endHour": 24.0 }
        ]));
        let path = EldViewModel::step_path(&day);
        let x8 = EldViewModel::x_for_hour(8.0);
        assert_eq!(path, vec![
            (EldViewModel::x_for_hour(0.0), EldViewModel::y_for_status(DutyStatus::OffDuty)),
            (x8, EldViewModel::y_for_status(DutyStatus::OffDuty)),
            (x8, EldViewModel::y_for_status(DutyStatus::Driving)),
            (EldViewModel::x_for_hour(24.0), EldViewModel::y_for_status(DutyStatus::Driving)),
        ]);
    }

    #[test]
    fn test_empty_log_has_no_path() {
        assert!(EldViewModel::step_path(&log(json!([]))).is_empty());
    }

    #[test]
    fn test_rows_follow_log_sheet_order() {
        let chart = EldViewModel::build_chart(&log(json!([])), "EN");
        let labels: Vec<&str> = chart.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Off duty", "Sleeper berth", "Driving", "On duty"]);
        assert!(chart.rows.windows(2).all(|w| w[0].center_y < w[1].center_y));
        assert_eq!(chart.hour_ticks.len(), 25);
        assert_eq!(chart.date_label, "2025-03-02");
        assert_eq!(chart.totals[2].1, "605.00");
    }

    #[test]
    fn test_hours_clamped_to_day() {
        assert_eq!(EldViewModel::x_for_hour(30.0), EldViewModel::x_for_hour(24.0));
        assert_eq!(EldViewModel::x_for_hour(-1.0), CHART_LEFT);
    }
}
