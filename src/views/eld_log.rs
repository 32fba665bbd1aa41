// ============================================================================
// ELD LOG VIEW - Hoja diaria en SVG (grid 24h x 4 estados + línea escalonada)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::EldDayLog;
use crate::viewmodels::eld_viewmodel::{EldChart, CHART_LEFT, CHART_TOP, ROW_HEIGHT};
use crate::viewmodels::EldViewModel;

pub fn render_eld_log(log: &EldDayLog, lang: &str) -> Result<Element, JsValue> {
    let chart = EldViewModel::build_chart(log, lang);

    let mut totals = ElementBuilder::new("dl")?.class("eld-totals");
    for (label, value) in &chart.totals {
        totals = totals
            .child(ElementBuilder::new("dt")?.text(label).build())?
            .child(ElementBuilder::new("dd")?.text(value).build())?;
    }

    Ok(ElementBuilder::new("article")?
        .class("eld-log")
        .child(ElementBuilder::new("h4")?.class("eld-date").text(&chart.date_label).build())?
        .child(render_chart_svg(&chart)?)?
        .child(totals.build())?
        .build())
}

fn render_chart_svg(chart: &EldChart) -> Result<Element, JsValue> {
    let svg = ElementBuilder::svg("svg")?
        .class("eld-chart")
        .attr("viewBox", &format!("0 0 {} {}", chart.width, chart.height))?
        .attr("preserveAspectRatio", "xMidYMid meet")?
        .build();

    let grid_bottom = chart.rows.last().map(|r| r.top + ROW_HEIGHT).unwrap_or(CHART_TOP);
    let grid_right = chart.hour_ticks.last().map(|(_, x)| *x).unwrap_or(CHART_LEFT);

    // Filas: fondo, etiqueta a la izquierda, total a la derecha
    for row in &chart.rows {
        let rect = ElementBuilder::svg("rect")?
            .class("eld-row")
            .attr("x", &CHART_LEFT.to_string())?
            .attr("y", &row.top.to_string())?
            .attr("width", &(grid_right - CHART_LEFT).to_string())?
            .attr("height", &ROW_HEIGHT.to_string())?
            .build();
        svg.append_child(&rect)?;

        let label = ElementBuilder::svg("text")?
            .class("eld-row-label")
            .attr("x", &(CHART_LEFT - 8.0).to_string())?
            .attr("y", &row.center_y.to_string())?
            .attr("text-anchor", "end")?
            .attr("dominant-baseline", "middle")?
            .text(&row.label)
            .build();
        svg.append_child(&label)?;

        let hours = ElementBuilder::svg("text")?
            .class("eld-row-hours")
            .attr("x", &(grid_right + 8.0).to_string())?
            .attr("y", &row.center_y.to_string())?
            .attr("dominant-baseline", "middle")?
            .text(&row.hours_text)
            .build();
        svg.append_child(&hours)?;
    }

    // Columnas horarias
    for (hour, x) in &chart.hour_ticks {
        let line = ElementBuilder::svg("line")?
            .class(if hour % 6 == 0 { "eld-tick major" } else { "eld-tick" })
            .attr("x1", &x.to_string())?
            .attr("y1", &CHART_TOP.to_string())?
            .attr("x2", &x.to_string())?
            .attr("y2", &grid_bottom.to_string())?
            .build();
        svg.append_child(&line)?;

        let label = ElementBuilder::svg("text")?
            .class("eld-tick-label")
            .attr("x", &x.to_string())?
            .attr("y", &(CHART_TOP - 8.0).to_string())?
            .attr("text-anchor", "middle")?
            .text(&hour.to_string())
            .build();
        svg.append_child(&label)?;
    }

    if !chart.path.is_empty() {
        let polyline = ElementBuilder::svg("polyline")?
            .class("eld-line")
            .attr("points", &chart.points_attr())?
            .attr("fill", "none")?
            .build();
        svg.append_child(&polyline)?;
    }

    Ok(svg)
}
