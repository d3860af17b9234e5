use std::f64::consts::TAU;
use web_sys::CanvasRenderingContext2d;
use crate::interaction::InteractionLayer;
use crate::overlay::{Marker, OverlayRenderer};

fn draw_marker(ctx: &CanvasRenderingContext2d, marker: &Marker, hovered: bool) {
    let Some(center) = marker.position else { return };
    if !center.x.is_finite() || !center.y.is_finite() {
        return;
    }

    ctx.begin_path();
    let _ = ctx.arc(center.x, center.y, marker.radius, 0.0, TAU);

    ctx.set_global_alpha(marker.opacity);
    ctx.set_fill_style_str(&marker.fill_color());
    ctx.fill();

    ctx.set_global_alpha(1.0);
    ctx.set_stroke_style_str(marker.stroke);
    ctx.set_line_width(marker.effective_stroke_width(hovered));
    ctx.stroke();
}

/// Repaint every marker in arena order. Does not touch the arena.
pub fn draw_overlay(
    ctx: &CanvasRenderingContext2d,
    (width, height): (f64, f64),
    renderer: &OverlayRenderer,
    interaction: &InteractionLayer,
) {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.save();
    for marker in renderer.markers() {
        draw_marker(ctx, marker, interaction.is_hovered(marker.station_id()));
    }
    ctx.restore();
}
