//! Frame viewer state.
//!
//! Owns the marker set shown on the current frame together with everything
//! needed to place the frame on screen. The viewport geometry is never
//! stored; it is recomputed from the surface and image sizes whenever it is
//! needed, exactly as a paint pass would.

use crate::error::ViewerError;
use crate::model::{Marker, Point};
use crate::viewport::{Size, ViewportGeometry};

/// A marker glyph ready to be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerGlyph {
    /// Display position of the glyph center
    pub position: Point,
    /// RGB stroke color
    pub color: [u8; 3],
}

/// Displays one frame and the markers placed on it.
#[derive(Debug, Clone)]
pub struct FrameViewer {
    /// Size of the display surface.
    surface: Size,
    /// Natural size of the displayed frame, if one is loaded.
    image: Option<Size>,
    /// Markers in insertion order.
    markers: Vec<Marker>,
    /// Display position of the latest pointer move.
    pending_pointer: Option<Point>,
    /// Whether a redraw has been requested since the last one was taken.
    repaint_pending: bool,
}

impl FrameViewer {
    /// Create a viewer for a surface of the given size, with no frame.
    pub fn new(surface: Size) -> Self {
        Self {
            surface,
            image: None,
            markers: Vec::new(),
            pending_pointer: None,
            repaint_pending: false,
        }
    }

    /// Size of the display surface.
    pub fn surface(&self) -> Size {
        self.surface
    }

    /// Natural size of the loaded frame.
    pub fn image(&self) -> Option<Size> {
        self.image
    }

    /// Resize the display surface.
    pub fn resize(&mut self, surface: Size) {
        if self.surface != surface {
            log::debug!("Surface resized to {:.0}x{:.0}", surface.width, surface.height);
            self.surface = surface;
            self.request_repaint();
        }
    }

    /// Replace the displayed frame. `None` clears it.
    pub fn set_image(&mut self, image: Option<Size>) {
        self.image = image;
        self.request_repaint();
    }

    /// Current placement of the frame on the surface.
    ///
    /// `None` when no frame is loaded or either size is empty.
    pub fn geometry(&self) -> Option<ViewportGeometry> {
        let image = self.image?;
        if image.is_empty() || self.surface.is_empty() {
            return None;
        }
        Some(ViewportGeometry::fit(self.surface, image))
    }

    /// Resolve a display point to image coordinates.
    pub fn to_image_coordinates(&self, display: Point) -> Result<Point, ViewerError> {
        match (self.geometry(), self.image) {
            (Some(geometry), Some(image)) => geometry.to_image_coordinates(display, image),
            _ => Err(ViewerError::out_of_bounds(display.x, display.y)),
        }
    }

    /// Glyphs for every marker, in marker order. Empty with no frame.
    pub fn glyphs(&self) -> Vec<MarkerGlyph> {
        let (Some(geometry), Some(image)) = (self.geometry(), self.image) else {
            return Vec::new();
        };
        self.markers
            .iter()
            .map(|marker| MarkerGlyph {
                position: geometry.to_display_coordinates(marker.position, image),
                color: marker.color(),
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Marker set
    // ------------------------------------------------------------------

    /// The markers on this frame, in insertion order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Replace the marker set with a copy of `markers`.
    ///
    /// The caller keeps its own list; later changes on either side are not
    /// shared. Passing `None` is a contract violation: it fails with
    /// [`ViewerError::InvalidArgument`] and leaves the current set in place.
    pub fn set_markers(&mut self, markers: Option<&[Marker]>) -> Result<(), ViewerError> {
        let markers = markers
            .ok_or_else(|| ViewerError::invalid_argument("The marker list must not be absent"))?;
        self.markers = markers.to_vec();
        log::debug!("Loaded {} markers", self.markers.len());
        self.request_repaint();
        Ok(())
    }

    /// Index of the first marker within `radius` of an image point.
    ///
    /// The boundary counts as a hit. Ties go to the earliest marker.
    pub fn hit_test(&self, point: Point, radius: f64) -> Option<usize> {
        self.markers
            .iter()
            .position(|marker| marker.position.distance_to(&point) <= radius)
    }

    /// Append a marker and return its index.
    pub fn push_marker(&mut self, marker: Marker) -> usize {
        self.markers.push(marker);
        self.markers.len() - 1
    }

    /// Replace the marker at `index`, returning the old one.
    pub fn replace_marker(&mut self, index: usize, marker: Marker) -> Option<Marker> {
        let slot = self.markers.get_mut(index)?;
        Some(std::mem::replace(slot, marker))
    }

    /// Remove the marker at `index`, keeping the order of the rest.
    pub fn remove_marker(&mut self, index: usize) -> Option<Marker> {
        (index < self.markers.len()).then(|| self.markers.remove(index))
    }

    // ------------------------------------------------------------------
    // Pointer
    // ------------------------------------------------------------------

    /// Display position of the latest pointer move.
    pub fn pending_pointer(&self) -> Option<Point> {
        self.pending_pointer
    }

    /// Record the latest pointer position.
    pub fn set_pending_pointer(&mut self, display: Point) {
        self.pending_pointer = Some(display);
    }

    // ------------------------------------------------------------------
    // Repaint
    // ------------------------------------------------------------------

    /// Ask for a redraw. Repeated requests before the next redraw coalesce.
    pub fn request_repaint(&mut self) {
        self.repaint_pending = true;
    }

    /// Whether a redraw is pending.
    pub fn needs_repaint(&self) -> bool {
        self.repaint_pending
    }

    /// Clear and return the pending redraw flag.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.repaint_pending)
    }
}
