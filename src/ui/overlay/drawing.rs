//! Drawing functions for the overlay using the egui painter.

use std::f32::consts::TAU;

use eframe::egui::{pos2, vec2, Color32, FontId, Painter, Pos2, Vec2};

use super::view::{text_top, DrawParams};
use crate::model::constants::{CIRCLE_COLOR, TEXT_COLOR, TEXT_SHADOW_RADIUS};

/// Number of offset copies used to fake the blurred text shadow.
const SHADOW_SAMPLES: usize = 8;

/// Draw the overlay with its top-left corner at `origin`.
pub fn paint(painter: &Painter, origin: Pos2, params: &DrawParams) {
    let center = origin + params.center.to_vec2();
    draw_circle(painter, center, params);
    draw_speed(painter, center, params);
}

/// Filled circle at `center`.
fn draw_circle(painter: &Painter, center: Pos2, params: &DrawParams) {
    let (r, g, b) = CIRCLE_COLOR;
    let fill = Color32::from_rgb(r, g, b).gamma_multiply(params.opacity);
    painter.circle_filled(center, params.radius, fill);
}

/// Speed text centered on `center`, over a soft black shadow.
fn draw_speed(painter: &Painter, center: Pos2, params: &DrawParams) {
    let font = FontId::proportional(params.text_size);
    let (r, g, b) = TEXT_COLOR;
    let text_color = Color32::from_rgb(r, g, b).gamma_multiply(params.opacity);
    let shadow_color =
        Color32::BLACK.gamma_multiply(params.opacity * 2.0 / SHADOW_SAMPLES as f32);

    let galley = painter.layout_no_wrap(params.text.clone(), font.clone(), text_color);
    let size = galley.size();
    let top_left = pos2(center.x - size.x / 2.0, text_top(center.y, size.y));

    let shadow = painter.layout_no_wrap(params.text.clone(), font, shadow_color);
    for offset in shadow_offsets() {
        painter.galley(top_left + offset, shadow.clone(), shadow_color);
    }
    painter.galley(top_left, galley, text_color);
}

/// Offsets on a circle of half the shadow radius.
fn shadow_offsets() -> impl Iterator<Item = Vec2> {
    let spread = TEXT_SHADOW_RADIUS / 2.0;
    (0..SHADOW_SAMPLES).map(move |i| {
        let angle = TAU * i as f32 / SHADOW_SAMPLES as f32;
        vec2(angle.cos(), angle.sin()) * spread
    })
}
