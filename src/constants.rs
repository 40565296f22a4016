//! Global constants for the frame viewer

/// Distance, in image pixels, within which a click selects a marker
pub const MARKER_HIT_RADIUS: f64 = 6.0;

/// Default display surface width
pub const DEFAULT_SURFACE_WIDTH: f64 = 800.0;

/// Default display surface height
pub const DEFAULT_SURFACE_HEIGHT: f64 = 600.0;
