//! Marker records placed on a video frame.

use serde::{Deserialize, Serialize};

use super::ant::{AntActivity, AntLocation, InteractionType};

/// Glyph color for single-ant markers.
pub const MARKER_COLOR: [u8; 3] = [255, 64, 64];

/// Glyph color for two-ant interaction markers.
pub const INTERACTION_COLOR: [u8; 3] = [64, 160, 255];

/// A 2D point. Used for both display and image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// The second ant of a two-ant interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// Activity of the other ant
    pub activity: AntActivity,
    /// Location of the other ant
    pub location: AntLocation,
    /// Direction of the interaction
    pub kind: InteractionType,
}

/// A point annotation describing one ant, or a pair of interacting ants.
///
/// Markers are value records. Editing produces a new marker that replaces
/// the old one in the marker set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Position in image coordinates
    pub position: Point,
    /// Activity of the focal ant
    pub activity: AntActivity,
    /// Location of the focal ant
    pub location: AntLocation,
    /// Identifier of the focal ant, if known
    #[serde(default)]
    pub ant_id: Option<u32>,
    /// Present when the marker records an interaction with a second ant
    #[serde(default)]
    pub interaction: Option<Interaction>,
}

impl Marker {
    /// Create a single-ant marker.
    pub fn new(position: Point, activity: AntActivity, location: AntLocation) -> Self {
        Self {
            position,
            activity,
            location,
            ant_id: None,
            interaction: None,
        }
    }

    /// Create a two-ant interaction marker.
    pub fn interaction(
        position: Point,
        activity: AntActivity,
        location: AntLocation,
        other: Interaction,
    ) -> Self {
        Self {
            interaction: Some(other),
            ..Self::new(position, activity, location)
        }
    }

    /// Set the focal ant identifier.
    pub fn with_ant_id(mut self, ant_id: Option<u32>) -> Self {
        self.ant_id = ant_id;
        self
    }

    /// Return the same record moved to `position`.
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Check if this marker describes two interacting ants.
    pub fn is_interaction(&self) -> bool {
        self.interaction.is_some()
    }

    /// RGB color used to draw this marker's glyph.
    pub fn color(&self) -> [u8; 3] {
        if self.is_interaction() {
            INTERACTION_COLOR
        } else {
            MARKER_COLOR
        }
    }
}
