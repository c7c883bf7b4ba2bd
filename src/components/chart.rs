//! Status chart
//!
//! Post status distribution drawn on an HTML5 canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::types::StatusCounts;

const BAR_COLORS: [(&str, &str); 4] = [
    ("Pending", "#f59e0b"),
    ("Approved", "#10b981"),
    ("Rejected", "#ef4444"),
    ("Posted", "#0ea5e9"),
];

/// Bar chart of posts per lifecycle status.
#[component]
pub fn StatusChart(#[prop(into)] counts: Signal<StatusCounts>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the counts change
    create_effect(move |_| {
        let counts = counts.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_status_chart(&canvas, &counts);
        }
    });

    view! {
        <div>
            <canvas node_ref=canvas_ref width="640" height="300" class="w-full rounded-lg" />

            // Legend
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {BAR_COLORS
                    .into_iter()
                    .map(|(label, color)| view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-600">{label}</span>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

fn draw_status_chart(canvas: &HtmlCanvasElement, counts: &StatusCounts) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 40.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 30.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let values = [
        counts.pending,
        counts.approved,
        counts.rejected,
        counts.posted,
    ];
    let max = values.iter().copied().max().unwrap_or(0);

    if max == 0 {
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data available", width / 2.0 - 60.0, height / 2.0);
        return;
    }

    // Horizontal grid lines
    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max as f64 * (1.0 - i as f64 / 4.0);
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // Bars
    let slot = chart_width / values.len() as f64;
    let bar_width = slot * 0.55;

    for (i, (value, (label, color))) in values.iter().zip(BAR_COLORS).enumerate() {
        let bar_height = (*value as f64 / max as f64) * chart_height;
        let x = margin_left + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&color.into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        // Count above the bar
        ctx.set_fill_style(&"#374151".into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(
            &value.to_string(),
            x + bar_width / 2.0 - 6.0,
            (y - 6.0).max(12.0),
        );

        // Label under the axis
        ctx.set_fill_style(&"#6b7280".into());
        let _ = ctx.fill_text(label, x + bar_width / 2.0 - 22.0, height - 10.0);
    }
}
