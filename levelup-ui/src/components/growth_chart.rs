//! Growth Chart Component
//!
//! Cumulative XP line with daily goal bars, drawn on an HTML5 canvas.

use leptos::*;
use levelup::{dashboard::group_thousands, ChartPoint};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const XP_COLOR: &str = "#00d4ff";
const GOALS_COLOR: &str = "#a855f7";
const GRID_COLOR: &str = "#1f2937";
const LABEL_COLOR: &str = "#9ca3af";

/// Plot area inside the canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartArea {
    /// Plot area for a canvas of the given size, leaving room for axis labels
    pub fn for_canvas(width: f64, height: f64) -> Self {
        let (margin_left, margin_right, margin_top, margin_bottom) = (60.0, 20.0, 20.0, 40.0);
        Self {
            left: margin_left,
            top: margin_top,
            width: width - margin_left - margin_right,
            height: height - margin_top - margin_bottom,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Y-axis bounds for the XP series, padded by 10% of the range
pub fn xp_bounds(points: &[ChartPoint]) -> (f64, f64) {
    let min = points.iter().map(|p| p.xp as f64).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.xp as f64).fold(f64::NEG_INFINITY, f64::max);

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    (min - padding, max + padding)
}

/// Canvas coordinates for each XP point, spaced evenly left to right
pub fn project_xp(points: &[ChartPoint], area: &ChartArea) -> Vec<(f64, f64)> {
    let (min, max) = xp_bounds(points);
    let step = if points.len() > 1 {
        area.width / (points.len() - 1) as f64
    } else {
        0.0
    };

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = area.left + step * i as f64;
            let y = area.top + ((max - p.xp as f64) / (max - min)) * area.height;
            (x, y)
        })
        .collect()
}

/// Growth chart card
#[component]
pub fn GrowthChart(data: Vec<ChartPoint>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let gained = match (data.first(), data.last()) {
        (Some(first), Some(last)) => last.xp.saturating_sub(first.xp),
        _ => 0,
    };
    let days = data.len();

    // Draw once the canvas is mounted
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &data);
        }
    });

    view! {
        <div class="bg-card border border-border rounded-2xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold text-white">"Growth"</h2>
                <span class="text-sm text-neon-green">
                    {format!("+{} XP in {} days", group_thousands(gained), days)}
                </span>
            </div>

            <canvas
                node_ref=canvas_ref
                width="800"
                height="320"
                class="w-full h-64 rounded-lg"
            />

            // Legend
            <div class="flex justify-center gap-6 mt-4">
                <LegendItem color=XP_COLOR label="Total XP" />
                <LegendItem color=GOALS_COLOR label="Goals completed" />
            </div>
        </div>
    }
}

#[component]
fn LegendItem(color: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div class="w-3 h-3 rounded-full" style=format!("background-color: {}", color) />
            <span class="text-sm text-gray-300">{label}</span>
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, points: &[ChartPoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let area = ChartArea::for_canvas(width, height);

    ctx.clear_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No progress yet", width / 2.0 - 60.0, height / 2.0);
        return;
    }

    let (min, max) = xp_bounds(points);

    // Horizontal grid lines with XP labels
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=4 {
        let y = area.top + (i as f64 / 4.0) * area.height;
        ctx.set_stroke_style(&GRID_COLOR.into());
        ctx.begin_path();
        ctx.move_to(area.left, y);
        ctx.line_to(area.left + area.width, y);
        ctx.stroke();

        let value = max - (i as f64 / 4.0) * (max - min);
        ctx.set_fill_style(&LABEL_COLOR.into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // Goal bars along the bottom third
    let max_goals = points.iter().map(|p| p.goals_completed).max().unwrap_or(0).max(1) as f64;
    let bar_width = (area.width / points.len() as f64 * 0.6).max(1.0);
    let projected = project_xp(points, &area);

    ctx.set_fill_style(&GOALS_COLOR.into());
    ctx.set_global_alpha(0.35);
    for (point, (x, _)) in points.iter().zip(&projected) {
        let bar_height = point.goals_completed as f64 / max_goals * area.height / 3.0;
        ctx.fill_rect(x - bar_width / 2.0, area.bottom() - bar_height, bar_width, bar_height);
    }
    ctx.set_global_alpha(1.0);

    // XP line
    ctx.set_stroke_style(&XP_COLOR.into());
    ctx.set_line_width(3.0);
    ctx.begin_path();
    for (i, (x, y)) in projected.iter().enumerate() {
        if i == 0 {
            ctx.move_to(*x, *y);
        } else {
            ctx.line_to(*x, *y);
        }
    }
    ctx.stroke();

    // Point markers
    ctx.set_fill_style(&XP_COLOR.into());
    for (x, y) in &projected {
        ctx.begin_path();
        let _ = ctx.arc(*x, *y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // X-axis date labels
    ctx.set_fill_style(&LABEL_COLOR.into());
    let label_every = (points.len() / 5).max(1);
    for (i, (point, (x, _))) in points.iter().zip(&projected).enumerate() {
        if i % label_every == 0 || i == points.len() - 1 {
            let label = point.date.format("%m/%d").to_string();
            let _ = ctx.fill_text(&label, x - 15.0, height - 10.0);
        }
    }
}
