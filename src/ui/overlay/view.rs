//! Overlay view geometry.
//!
//! Everything here is plain arithmetic over [`OverlayState`] so it can be
//! tested without a window. [`super::drawing`] turns the result into shapes.

use eframe::egui::{pos2, vec2, Pos2, Vec2};

use crate::model::constants::*;
use crate::model::OverlayState;

/// Size constraint handed down by the window host for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// Any size is fine.
    Unspecified,
    /// No larger than this.
    AtMost(f32),
    /// Exactly this size.
    Exactly(f32),
}

impl MeasureSpec {
    /// Reconciles the view's desired size with this constraint.
    pub fn resolve(self, desired: f32) -> f32 {
        match self {
            MeasureSpec::Unspecified => desired,
            MeasureSpec::AtMost(max) => desired.min(max),
            MeasureSpec::Exactly(size) => size,
        }
    }
}

/// Edge length the view asks for: 120 dp times the scale factor, in pixels.
pub fn intrinsic_size(scale: f32, pixels_per_dp: f32) -> f32 {
    (BASE_SIZE_DP * scale * pixels_per_dp).trunc()
}

/// Measured (width, height) of the view under the host's constraints.
pub fn measure(
    state: &OverlayState,
    pixels_per_dp: f32,
    width: MeasureSpec,
    height: MeasureSpec,
) -> Vec2 {
    let base = intrinsic_size(state.scale, pixels_per_dp);
    vec2(width.resolve(base), height.resolve(base))
}

/// Everything needed to paint one frame of the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawParams {
    /// Circle center, relative to the view's top-left corner.
    pub center: Pos2,
    /// Circle radius.
    pub radius: f32,
    /// Whole-view opacity [0.0, 1.0].
    pub opacity: f32,
    /// Speed text, truncated toward zero.
    pub text: String,
    /// Text size in points.
    pub text_size: f32,
}

/// Lays out a view of `size` for `state`.
pub fn layout(state: &OverlayState, size: Vec2, pixels_per_dp: f32) -> DrawParams {
    DrawParams {
        center: pos2(size.x / 2.0, size.y / 2.0),
        radius: size.x.min(size.y) / 2.0 * CIRCLE_RADIUS_FACTOR,
        opacity: state.opacity(),
        text: state.speed_text(),
        text_size: TEXT_SIZE_SP * pixels_per_dp,
    }
}

/// Top of a text block of `text_height` so it sits vertically centered on
/// `center_y`.
///
/// `text_height` is the galley row height, which egui derives from ascent,
/// descent and line gap. For fonts with a non-zero line gap the glyphs sit
/// half that gap higher than ascent/descent centring would put them.
pub fn text_top(center_y: f32, text_height: f32) -> f32 {
    center_y - text_height / 2.0
}
