//! Headless replay of a recorded annotation session.
//!
//! A session script describes the surface, the frame size, the markers the
//! frame starts with, a sequence of input events and the answers the user
//! gave to each dialog. Replaying it drives the same handlers the canvas
//! uses.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AppConfig;
use crate::constants::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
use crate::dialog::{DialogAnswer, ScriptedDialogs};
use crate::error::ViewerError;
use crate::handlers::handle_event;
use crate::message::{CanvasEvent, EventOutcome};
use crate::model::Marker;
use crate::viewer::FrameViewer;
use crate::viewport::Size;

/// Errors that can occur while loading or running a session script.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid session script: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Viewer(#[from] ViewerError),
}

/// A recorded session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionScript {
    /// Display surface size
    #[serde(default = "default_surface")]
    pub surface: Size,
    /// Natural size of the frame
    pub image: Size,
    /// Markers already on the frame
    #[serde(default)]
    pub markers: Vec<Marker>,
    /// Ant identifier remembered from earlier sessions
    #[serde(default)]
    pub last_ant_id: Option<u32>,
    /// Input events in arrival order
    #[serde(default)]
    pub events: Vec<CanvasEvent>,
    /// Dialog answers in the order the dialogs were opened
    #[serde(default)]
    pub dialog_answers: Vec<DialogAnswer>,
}

fn default_surface() -> Size {
    Size::new(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT)
}

impl SessionScript {
    /// Parse a script from JSON.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a script from a file.
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Result of replaying a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    /// Outcome of each event, in event order
    pub outcomes: Vec<EventOutcome>,
    /// Redraws performed; requests between two redraws count once
    pub repaints: usize,
    /// Dialog answers left unused
    pub unused_answers: usize,
    /// Final marker set
    pub markers: Vec<Marker>,
}

/// Replay a session script.
///
/// The viewer redraws after every event that requested it, so the repaint
/// count shows how requests coalesce.
pub fn run_session(script: &SessionScript, config: &AppConfig) -> Result<SessionReport, SessionError> {
    let settings = config.interaction_settings();

    let mut viewer = FrameViewer::new(script.surface);
    viewer.set_image(Some(script.image));
    viewer.set_markers(Some(script.markers.as_slice()))?;
    log::debug!(
        "Replaying on a {:?} surface with a {:?} frame",
        viewer.surface(),
        viewer.image()
    );

    let mut dialogs =
        ScriptedDialogs::new(script.dialog_answers.iter().cloned()).with_last_ant_id(script.last_ant_id);
    let memory = dialogs.memory();

    let mut repaints = usize::from(viewer.take_repaint());
    let mut outcomes = Vec::with_capacity(script.events.len());
    for event in &script.events {
        let outcome = handle_event(&mut viewer, *event, &mut dialogs, &*memory, &settings);
        log::debug!("{:?} -> {:?}", event, outcome);
        outcomes.push(outcome);
        if viewer.take_repaint() {
            repaints += 1;
        }
    }

    log::info!(
        "Replayed {} events: {} markers, {} repaints",
        outcomes.len(),
        viewer.markers().len(),
        repaints
    );

    Ok(SessionReport {
        outcomes,
        repaints,
        unused_answers: dialogs.remaining(),
        markers: viewer.markers().to_vec(),
    })
}
