//! Pan/zoom transform between map pixels and the screen
//!
//! Pure transform state for a renderer to drive; no input handling here.
//! Map pixels are the projection's output space.

use serde::{Deserialize, Serialize};

use crate::core::types::ScreenPoint;

const MIN_ZOOM: f32 = 0.2;
const MAX_ZOOM: f32 = 3.0;
const ZOOM_STEP: f32 = 0.1;

/// Pan/zoom state applied on top of projected map coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub pan_x: f32,
    pub pan_y: f32,
    pub zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    /// Map pixels to screen pixels
    pub fn world_to_screen(&self, p: ScreenPoint) -> ScreenPoint {
        p * self.zoom + ScreenPoint::new(self.pan_x, self.pan_y)
    }

    /// Screen pixels back to map pixels
    pub fn screen_to_world(&self, p: ScreenPoint) -> ScreenPoint {
        (p - ScreenPoint::new(self.pan_x, self.pan_y)) * (1.0 / self.zoom)
    }

    /// Pan by a screen-space delta
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// One zoom step in, clamped
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    /// One zoom step out, clamped
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Scale by a factor around a screen-space focus point
    pub fn zoom_at(&mut self, factor: f32, focus: ScreenPoint) {
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let ratio = new_zoom / self.zoom;

        // Keep the map point under the focus fixed on screen
        self.pan_x = focus.x - (focus.x - self.pan_x) * ratio;
        self.pan_y = focus.y - (focus.y - self.pan_y) * ratio;
        self.zoom = new_zoom;
    }

    /// Fit the given map-pixel bounds into a canvas, with a small margin
    pub fn fit_bounds(&mut self, min: ScreenPoint, max: ScreenPoint, canvas_w: f32, canvas_h: f32) {
        let world_w = max.x - min.x;
        let world_h = max.y - min.y;
        if world_w <= 0.0 || world_h <= 0.0 || canvas_w <= 0.0 || canvas_h <= 0.0 {
            return;
        }

        let margin = 0.05;
        let scale_x = canvas_w / (world_w * (1.0 + margin * 2.0));
        let scale_y = canvas_h / (world_h * (1.0 + margin * 2.0));
        self.zoom = scale_x.min(scale_y).clamp(MIN_ZOOM, MAX_ZOOM);

        let center_x = (min.x + max.x) / 2.0;
        let center_y = (min.y + max.y) / 2.0;
        self.pan_x = canvas_w / 2.0 - center_x * self.zoom;
        self.pan_y = canvas_h / 2.0 - center_y * self.zoom;
    }

    /// Transform attribute value for SVG groups
    pub fn svg_transform(&self) -> String {
        format!(
            "translate({} {}) scale({})",
            self.pan_x, self.pan_y, self.zoom
        )
    }
}
