//! Keyboard shortcuts for quick marker placement.
//!
//! A typed character places a predefined marker at the last known cursor
//! position. Every template records a walking ant; the ant identifier comes
//! from the most recently used one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;
use crate::model::{AntActivity, AntLocation, Interaction, InteractionType, Marker, Point};

/// Marker produced by a shortcut key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MarkerTemplate {
    /// One walking ant at a location
    Single { location: AntLocation },
    /// Two walking ants interacting, both at the same location
    Interaction {
        location: AntLocation,
        interaction: InteractionType,
    },
}

impl MarkerTemplate {
    /// Build a marker from this template.
    pub fn build(&self, position: Point, ant_id: Option<u32>) -> Marker {
        let marker = match *self {
            MarkerTemplate::Single { location } => {
                Marker::new(position, AntActivity::Walking, location)
            }
            MarkerTemplate::Interaction {
                location,
                interaction,
            } => Marker::interaction(
                position,
                AntActivity::Walking,
                location,
                Interaction {
                    activity: AntActivity::Walking,
                    location,
                    kind: interaction,
                },
            ),
        };
        marker.with_ant_id(ant_id)
    }

    /// Short description for settings listings.
    pub fn describe(&self) -> String {
        match self {
            MarkerTemplate::Single { location } => format!("Walking, {}", location.name()),
            MarkerTemplate::Interaction {
                location,
                interaction,
            } => format!("{} interaction, {}", interaction.name(), location.name()),
        }
    }
}

/// Character-to-template shortcut bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortcutTable {
    bindings: BTreeMap<char, MarkerTemplate>,
}

impl Default for ShortcutTable {
    fn default() -> Self {
        let single = |location| MarkerTemplate::Single { location };
        let bindings = BTreeMap::from([
            (
                'i',
                MarkerTemplate::Interaction {
                    location: AntLocation::EntranceChamber,
                    interaction: InteractionType::TwoWay,
                },
            ),
            ('x', single(AntLocation::AtExit)),
            ('e', single(AntLocation::EntranceChamber)),
            ('t', single(AntLocation::AtTunnel)),
            ('g', single(AntLocation::Edge)),
            ('o', single(AntLocation::Outside)),
        ]);
        Self { bindings }
    }
}

impl ShortcutTable {
    /// Create a table with the default bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the template bound to a typed character.
    pub fn template_for(&self, key: char) -> Result<MarkerTemplate, ViewerError> {
        self.bindings
            .get(&key)
            .copied()
            .ok_or(ViewerError::UnrecognizedShortcut(key))
    }

    /// Bind a character, returning the template it replaced.
    pub fn bind(&mut self, key: char, template: MarkerTemplate) -> Option<MarkerTemplate> {
        self.bindings.insert(key, template)
    }

    /// Remove a binding.
    pub fn unbind(&mut self, key: char) -> Option<MarkerTemplate> {
        self.bindings.remove(&key)
    }

    /// Describe what a key is already bound to, if anything.
    pub fn key_conflict(&self, key: char) -> Option<String> {
        self.bindings
            .get(&key)
            .map(|template| format!("'{}' places {}", key, template.describe()))
    }

    /// Iterate over bindings in key order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &MarkerTemplate)> {
        self.bindings.iter().map(|(key, template)| (*key, template))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
