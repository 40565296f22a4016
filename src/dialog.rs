//! Ports to the marker dialogs and the remembered ant identifier.
//!
//! Dialogs are modal: a request returns only once the user has answered, so
//! at most one edit is ever in flight.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::model::{Marker, Point};

/// Result of asking the user to edit an existing marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "marker", rename_all = "lowercase")]
pub enum EditOutcome {
    Cancelled,
    Deleted,
    /// Replacement attributes. The position is ignored.
    Confirmed(Marker),
}

/// Result of asking the user to describe a new marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "marker", rename_all = "lowercase")]
pub enum CreateOutcome {
    Cancelled,
    /// New marker attributes. The caller overwrites the position.
    Confirmed(Marker),
}

/// Modal dialogs that collect marker attributes from the user.
///
/// `anchor` is the display position of the event that opened the dialog, so
/// the dialog can appear under the cursor.
pub trait MarkerDialogs {
    /// Ask the user to edit or delete `marker`.
    fn request_edit(&mut self, marker: &Marker, anchor: Point) -> EditOutcome;

    /// Ask the user for a new marker. `interaction_hint` opens the dialog in
    /// two-ant interaction mode.
    fn request_create(&mut self, interaction_hint: bool, anchor: Point) -> CreateOutcome;
}

/// Remembers the ant identifier most recently entered in a dialog.
pub trait AntIdMemory {
    fn last_ant_id(&self) -> Option<u32>;

    fn remember(&self, ant_id: u32);
}

/// In-memory [`AntIdMemory`].
#[derive(Debug, Default)]
pub struct LastAntId {
    value: Cell<Option<u32>>,
}

impl LastAntId {
    pub fn new(initial: Option<u32>) -> Self {
        Self {
            value: Cell::new(initial),
        }
    }
}

impl AntIdMemory for LastAntId {
    fn last_ant_id(&self) -> Option<u32> {
        self.value.get()
    }

    fn remember(&self, ant_id: u32) {
        self.value.set(Some(ant_id));
    }
}

/// A dialog request received by [`ScriptedDialogs`].
#[derive(Debug, Clone, PartialEq)]
pub enum DialogRequest {
    Edit { marker: Marker, anchor: Point },
    Create { interaction_hint: bool, anchor: Point },
}

/// A prepared answer for [`ScriptedDialogs`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "dialog", rename_all = "lowercase")]
pub enum DialogAnswer {
    Edit(EditOutcome),
    Create(CreateOutcome),
}

/// Dialogs that answer from a prepared queue instead of asking a user.
///
/// Requests are answered in order. A request whose next answer belongs to
/// the other dialog kind, or that finds the queue empty, is cancelled and
/// leaves the queue untouched. Confirmed markers carrying an ant identifier
/// update the ant memory, as an interactive dialog would.
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    answers: VecDeque<DialogAnswer>,
    requests: Vec<DialogRequest>,
    memory: Rc<LastAntId>,
}

impl ScriptedDialogs {
    pub fn new(answers: impl IntoIterator<Item = DialogAnswer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            requests: Vec::new(),
            memory: Rc::default(),
        }
    }

    /// Seed the remembered ant identifier.
    pub fn with_last_ant_id(self, ant_id: Option<u32>) -> Self {
        Self {
            memory: Rc::new(LastAntId::new(ant_id)),
            ..self
        }
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> &[DialogRequest] {
        &self.requests
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// The ant identifier memory shared with shortcut placement.
    pub fn memory(&self) -> Rc<LastAntId> {
        Rc::clone(&self.memory)
    }

    fn remember_from(&self, marker: &Marker) {
        if let Some(ant_id) = marker.ant_id {
            self.memory.remember(ant_id);
        }
    }
}

impl MarkerDialogs for ScriptedDialogs {
    fn request_edit(&mut self, marker: &Marker, anchor: Point) -> EditOutcome {
        self.requests.push(DialogRequest::Edit {
            marker: marker.clone(),
            anchor,
        });

        if !matches!(self.answers.front(), Some(DialogAnswer::Edit(_))) {
            log::warn!("No scripted edit answer queued, cancelling");
            return EditOutcome::Cancelled;
        }
        let Some(DialogAnswer::Edit(outcome)) = self.answers.pop_front() else {
            return EditOutcome::Cancelled;
        };
        if let EditOutcome::Confirmed(marker) = &outcome {
            self.remember_from(marker);
        }
        outcome
    }

    fn request_create(&mut self, interaction_hint: bool, anchor: Point) -> CreateOutcome {
        self.requests.push(DialogRequest::Create {
            interaction_hint,
            anchor,
        });

        if !matches!(self.answers.front(), Some(DialogAnswer::Create(_))) {
            log::warn!("No scripted create answer queued, cancelling");
            return CreateOutcome::Cancelled;
        }
        let Some(DialogAnswer::Create(outcome)) = self.answers.pop_front() else {
            return CreateOutcome::Cancelled;
        };
        if let CreateOutcome::Confirmed(marker) = &outcome {
            self.remember_from(marker);
        }
        outcome
    }
}
