//! Ant activity, location and interaction tags.

use serde::{Deserialize, Serialize};

/// What an observed ant is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AntActivity {
    #[default]
    Walking,
    Standing,
    Digging,
    Grooming,
    Carrying,
    Unknown,
}

impl AntActivity {
    /// Get the display name for this activity.
    pub fn name(&self) -> &'static str {
        match self {
            AntActivity::Walking => "Walking",
            AntActivity::Standing => "Standing",
            AntActivity::Digging => "Digging",
            AntActivity::Grooming => "Grooming",
            AntActivity::Carrying => "Carrying",
            AntActivity::Unknown => "Unknown",
        }
    }

    /// Get all activities in display order.
    pub fn all() -> &'static [AntActivity] {
        &[
            AntActivity::Walking,
            AntActivity::Standing,
            AntActivity::Digging,
            AntActivity::Grooming,
            AntActivity::Carrying,
            AntActivity::Unknown,
        ]
    }
}

/// Where in the nest an observed ant is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AntLocation {
    #[default]
    EntranceChamber,
    AtExit,
    AtTunnel,
    Edge,
    Outside,
    Unknown,
}

impl AntLocation {
    /// Get the display name for this location.
    pub fn name(&self) -> &'static str {
        match self {
            AntLocation::EntranceChamber => "Entrance chamber",
            AntLocation::AtExit => "At exit",
            AntLocation::AtTunnel => "At tunnel",
            AntLocation::Edge => "Edge",
            AntLocation::Outside => "Outside",
            AntLocation::Unknown => "Unknown",
        }
    }

    /// Get all locations in display order.
    pub fn all() -> &'static [AntLocation] {
        &[
            AntLocation::EntranceChamber,
            AntLocation::AtExit,
            AntLocation::AtTunnel,
            AntLocation::Edge,
            AntLocation::Outside,
            AntLocation::Unknown,
        ]
    }
}

/// Direction of an interaction between two ants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InteractionType {
    /// Both ants engage each other
    #[default]
    TwoWay,
    /// The focal ant engages the other one
    OneWay,
    Unknown,
}

impl InteractionType {
    /// Get the display name for this interaction type.
    pub fn name(&self) -> &'static str {
        match self {
            InteractionType::TwoWay => "Two-way",
            InteractionType::OneWay => "One-way",
            InteractionType::Unknown => "Unknown",
        }
    }

    /// Get all interaction types in display order.
    pub fn all() -> &'static [InteractionType] {
        &[
            InteractionType::TwoWay,
            InteractionType::OneWay,
            InteractionType::Unknown,
        ]
    }
}
