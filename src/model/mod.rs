//! Data models for the frame viewer.

mod ant;
mod marker;

pub use ant::{AntActivity, AntLocation, InteractionType};
pub use marker::{INTERACTION_COLOR, Interaction, MARKER_COLOR, Marker, Point};
