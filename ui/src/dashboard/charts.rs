//! Inline-SVG charts for the price-range and category breakdowns.
//!
//! These stay deliberately thin: the series arrive pre-aggregated, so the
//! only work here is scaling values into viewBox coordinates. Labels keep
//! the order the series carries.

use api::ChartSeries;
use dioxus::prelude::*;

use super::state::DashboardState;
use crate::core::format;

const BAR_FILL: &str = "rgba(75, 192, 192, 0.6)";
const PIE_PALETTE: [&str; 3] = ["#FF6384", "#36A2EB", "#FFCE56"];

const BAR_VIEW_WIDTH: f64 = 640.0;
const BAR_VIEW_HEIGHT: f64 = 320.0;
const BAR_MARGIN_TOP: f64 = 28.0;
const BAR_MARGIN_BOTTOM: f64 = 44.0;
const BAR_MARGIN_SIDE: f64 = 36.0;

const PIE_VIEW_SIZE: f64 = 240.0;
const PIE_RADIUS: f64 = 92.0;

/// Items-per-price-range bar chart.
#[component]
pub fn PriceRangePanel(state: Signal<DashboardState>) -> Element {
    let series = state().price_ranges;

    rsx! {
        section { class: "dashboard-chart",
            h2 { "Price Range Distribution" }
            if series.is_empty() {
                p { class: "dashboard-chart__empty", "No data available for bar chart." }
            } else {
                BarChart { series }
            }
        }
    }
}

/// Items-per-category pie chart with a legend.
#[component]
pub fn CategoryPanel(state: Signal<DashboardState>) -> Element {
    let series = state().categories;

    rsx! {
        section { class: "dashboard-chart",
            h2 { "Category Distribution" }
            if series.is_empty() {
                p { class: "dashboard-chart__empty", "No data available for pie chart." }
            } else {
                PieChart { series }
            }
        }
    }
}

struct Bar {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    center: f64,
    value_y: f64,
    value_text: String,
    label: String,
}

#[component]
fn BarChart(series: ChartSeries) -> Element {
    let plot_width = BAR_VIEW_WIDTH - 2.0 * BAR_MARGIN_SIDE;
    let plot_height = BAR_VIEW_HEIGHT - BAR_MARGIN_TOP - BAR_MARGIN_BOTTOM;
    let baseline = BAR_VIEW_HEIGHT - BAR_MARGIN_BOTTOM;
    let axis_end = BAR_VIEW_WIDTH - BAR_MARGIN_SIDE;
    let label_y = baseline + 18.0;

    // All-zero months still get a real axis; the scaling floor keeps the
    // math finite without inventing bars.
    let max_value = series
        .values
        .iter()
        .copied()
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let slot_width = plot_width / series.len() as f64;
    let bar_width = (slot_width * 0.6).min(64.0);

    let bars: Vec<Bar> = series
        .labels
        .iter()
        .zip(series.values.iter())
        .enumerate()
        .map(|(index, (label, value))| {
            let center = BAR_MARGIN_SIDE + slot_width * (index as f64 + 0.5);
            let height = (value / max_value).max(0.0) * plot_height;
            let y = baseline - height;
            Bar {
                x: center - bar_width / 2.0,
                y,
                width: bar_width,
                height,
                center,
                value_y: y - 8.0,
                value_text: format::number(*value),
                label: label.clone(),
            }
        })
        .collect();

    rsx! {
        svg {
            class: "dashboard-chart__plot",
            view_box: "0 0 {BAR_VIEW_WIDTH} {BAR_VIEW_HEIGHT}",
            role: "img",
            line {
                x1: "{BAR_MARGIN_SIDE}",
                y1: "{baseline}",
                x2: "{axis_end}",
                y2: "{baseline}",
                class: "dashboard-chart__axis",
            }
            for bar in bars {
                rect {
                    x: "{bar.x}",
                    y: "{bar.y}",
                    width: "{bar.width}",
                    height: "{bar.height}",
                    fill: BAR_FILL,
                }
                text {
                    class: "dashboard-chart__value",
                    x: "{bar.center}",
                    y: "{bar.value_y}",
                    text_anchor: "middle",
                    "{bar.value_text}"
                }
                text {
                    class: "dashboard-chart__label",
                    x: "{bar.center}",
                    y: "{label_y}",
                    text_anchor: "middle",
                    "{bar.label}"
                }
            }
        }
    }
}

struct Slice {
    path: String,
    fill: &'static str,
}

struct LegendEntry {
    label: String,
    value_text: String,
    fill: &'static str,
}

#[component]
fn PieChart(series: ChartSeries) -> Element {
    let center = PIE_VIEW_SIZE / 2.0;
    let total: f64 = series.values.iter().sum();

    let mut slices = Vec::new();
    if total > 0.0 {
        let mut cursor = 0.0;
        for (index, value) in series.values.iter().enumerate() {
            let span = value / total;
            let start = cursor;
            cursor += span;
            if let Some(path) = slice_path(center, center, PIE_RADIUS, start, cursor) {
                slices.push(Slice {
                    path,
                    fill: PIE_PALETTE[index % PIE_PALETTE.len()],
                });
            }
        }
    }

    let legend: Vec<LegendEntry> = series
        .labels
        .iter()
        .zip(series.values.iter())
        .enumerate()
        .map(|(index, (label, value))| LegendEntry {
            label: label.clone(),
            value_text: format::number(*value),
            fill: PIE_PALETTE[index % PIE_PALETTE.len()],
        })
        .collect();

    rsx! {
        div { class: "dashboard-chart__pie",
            svg {
                class: "dashboard-chart__plot dashboard-chart__plot--pie",
                view_box: "0 0 {PIE_VIEW_SIZE} {PIE_VIEW_SIZE}",
                role: "img",
                for slice in slices {
                    path { d: "{slice.path}", fill: slice.fill }
                }
            }
            ul { class: "dashboard-chart__legend",
                for entry in legend {
                    li {
                        span {
                            class: "dashboard-chart__swatch",
                            style: "background: {entry.fill};",
                        }
                        span { "{entry.label}: {entry.value_text}" }
                    }
                }
            }
        }
    }
}

/// SVG path for the slice spanning `start..end`, both in turns from the top
/// of the circle, clockwise. Degenerate spans yield no path; a whole-circle
/// span yields a two-arc ring, since a single arc with equal endpoints
/// renders as nothing.
fn slice_path(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> Option<String> {
    let span = end - start;
    if span <= 0.0 {
        return None;
    }
    if span >= 1.0 - 1e-4 {
        let top = cy - radius;
        let bottom = cy + radius;
        return Some(format!(
            "M {cx:.2} {top:.2} A {radius:.2} {radius:.2} 0 1 1 {cx:.2} {bottom:.2} \
             A {radius:.2} {radius:.2} 0 1 1 {cx:.2} {top:.2} Z"
        ));
    }

    let (x0, y0) = polar(cx, cy, radius, start);
    let (x1, y1) = polar(cx, cy, radius, end);
    let large_arc = i32::from(span > 0.5);
    Some(format!(
        "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} \
         A {radius:.2} {radius:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
    ))
}

/// Point on the circle at `turns` of a full revolution, measured clockwise
/// from twelve o'clock.
fn polar(cx: f64, cy: f64, radius: f64, turns: f64) -> (f64, f64) {
    let angle = std::f64::consts::TAU * turns - std::f64::consts::FRAC_PI_2;
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}
