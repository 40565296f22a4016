//! Input events delivered to the frame canvas and what became of them.

use serde::{Deserialize, Serialize};

/// Mouse button of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// An input event in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CanvasEvent {
    /// Pointer clicked on the surface
    Click {
        x: f64,
        y: f64,
        #[serde(default)]
        button: PointerButton,
    },
    /// Pointer moved over the surface
    PointerMoved { x: f64, y: f64 },
    /// A character was typed while the surface had focus
    KeyTyped { key: char },
}

/// Effect an event had on the marker set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "index", rename_all = "snake_case")]
pub enum EventOutcome {
    /// A marker was appended at this index
    Created(usize),
    /// The marker at this index was replaced
    Edited(usize),
    /// The marker at this index was removed
    Deleted(usize),
    /// The pointer position was recorded
    PointerRecorded,
    /// A dialog was opened and dismissed without changes
    Cancelled,
    /// The event did not apply and was ignored
    Discarded,
}

impl EventOutcome {
    /// Whether the marker set changed.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            EventOutcome::Created(_) | EventOutcome::Edited(_) | EventOutcome::Deleted(_)
        )
    }
}
