//! Frame-to-surface fit mathematics.
//!
//! Places the source frame inside the display surface, preserving its aspect
//! ratio and never scaling above its natural size, and converts points
//! between display and image coordinates.

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;
use crate::model::Point;

/// Width and height of a surface or image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either side is non-positive or not a finite number.
    pub fn is_empty(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Placement of the scaled frame inside the display surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    /// Display X of the frame's top left corner
    pub top_left_x: f64,
    /// Display Y of the frame's top left corner
    pub top_left_y: f64,
    /// Displayed width of the frame
    pub displayed_width: f64,
    /// Displayed height of the frame
    pub displayed_height: f64,
}

impl ViewportGeometry {
    /// Fit `image` into `surface`, centered.
    ///
    /// The frame is shrunk along whichever axis is relatively larger than the
    /// surface; the other side follows from the aspect ratio.
    pub fn fit(surface: Size, image: Size) -> Self {
        let aspect_ratio = image.aspect_ratio();
        let width_ratio = image.width / surface.width;
        let height_ratio = image.height / surface.height;

        let (displayed_width, displayed_height) = if height_ratio < width_ratio {
            // Surface is relatively taller than the frame: width constrains
            let width = image.width.min(surface.width);
            (width, width / aspect_ratio)
        } else {
            // Surface is relatively wider: height constrains
            let height = image.height.min(surface.height);
            (height * aspect_ratio, height)
        };

        Self {
            top_left_x: surface.width / 2.0 - displayed_width / 2.0,
            top_left_y: surface.height / 2.0 - displayed_height / 2.0,
            displayed_width,
            displayed_height,
        }
    }

    /// Check if a display point is on or inside the displayed frame.
    pub fn contains(&self, display: Point) -> bool {
        display.x >= self.top_left_x
            && display.x <= self.top_left_x + self.displayed_width
            && display.y >= self.top_left_y
            && display.y <= self.top_left_y + self.displayed_height
    }

    /// Convert a display point to image coordinates.
    ///
    /// Fails with [`ViewerError::OutOfBounds`] when the point is outside the
    /// displayed frame, or when nothing is displayed at all.
    pub fn to_image_coordinates(&self, display: Point, image: Size) -> Result<Point, ViewerError> {
        if self.displayed_width <= 0.0 || self.displayed_height <= 0.0 || !self.contains(display) {
            return Err(ViewerError::out_of_bounds(display.x, display.y));
        }

        // The far edge is compared against a rounded sum, so a point on it can
        // land a few ulps past the displayed size.
        let x_ratio = ((display.x - self.top_left_x) / self.displayed_width).clamp(0.0, 1.0);
        let y_ratio = ((display.y - self.top_left_y) / self.displayed_height).clamp(0.0, 1.0);

        Ok(Point::new(image.width * x_ratio, image.height * y_ratio))
    }

    /// Convert an image point to display coordinates. Never fails.
    pub fn to_display_coordinates(&self, image_point: Point, image: Size) -> Point {
        let x_ratio = image_point.x / image.width;
        let y_ratio = image_point.y / image.height;
        Point::new(
            self.top_left_x + self.displayed_width * x_ratio,
            self.top_left_y + self.displayed_height * y_ratio,
        )
    }
}
