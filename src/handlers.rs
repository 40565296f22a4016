//! Event handlers for the frame canvas.
//!
//! Each handler decides what a single input event does to the marker set:
//! edit or delete the marker under the cursor, create a new one through a
//! dialog or a shortcut key, or nothing at all. Events that do not apply
//! (outside the frame, unbound keys) are dropped silently.

use crate::constants::MARKER_HIT_RADIUS;
use crate::dialog::{AntIdMemory, CreateOutcome, EditOutcome, MarkerDialogs};
use crate::error::ViewerError;
use crate::keybindings::ShortcutTable;
use crate::message::{CanvasEvent, EventOutcome, PointerButton};
use crate::model::Point;
use crate::viewer::FrameViewer;

/// Tunables for event handling.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionSettings {
    /// Hit radius in image pixels
    pub hit_radius: f64,
    /// Shortcut key bindings
    pub shortcuts: ShortcutTable,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            hit_radius: MARKER_HIT_RADIUS,
            shortcuts: ShortcutTable::default(),
        }
    }
}

/// Dispatch one canvas event.
pub fn handle_event<D>(
    viewer: &mut FrameViewer,
    event: CanvasEvent,
    dialogs: &mut D,
    ant_ids: &dyn AntIdMemory,
    settings: &InteractionSettings,
) -> EventOutcome
where
    D: MarkerDialogs + ?Sized,
{
    match event {
        CanvasEvent::Click { x, y, button } => {
            handle_click(viewer, Point::new(x, y), button, dialogs, settings)
        }
        CanvasEvent::PointerMoved { x, y } => handle_pointer_moved(viewer, Point::new(x, y)),
        CanvasEvent::KeyTyped { key } => handle_key_typed(viewer, key, ant_ids, settings),
    }
}

/// Handle a click: edit the marker under the cursor or create a new one.
pub fn handle_click<D>(
    viewer: &mut FrameViewer,
    display: Point,
    button: PointerButton,
    dialogs: &mut D,
    settings: &InteractionSettings,
) -> EventOutcome
where
    D: MarkerDialogs + ?Sized,
{
    let image_point = match viewer.to_image_coordinates(display) {
        Ok(point) => point,
        Err(e) => return discard(e),
    };

    if let Some(index) = viewer.hit_test(image_point, settings.hit_radius) {
        return edit_marker(viewer, index, display, dialogs);
    }

    let interaction_hint = button == PointerButton::Secondary;
    match dialogs.request_create(interaction_hint, display) {
        CreateOutcome::Cancelled => {
            log::debug!("Marker creation cancelled");
            EventOutcome::Cancelled
        }
        CreateOutcome::Confirmed(marker) => {
            let index = viewer.push_marker(marker.with_position(image_point));
            log::debug!(
                "Created marker {} at ({:.1}, {:.1})",
                index,
                image_point.x,
                image_point.y
            );
            viewer.request_repaint();
            EventOutcome::Created(index)
        }
    }
}

/// Open the edit dialog for the marker at `index` and apply the answer.
fn edit_marker<D>(
    viewer: &mut FrameViewer,
    index: usize,
    anchor: Point,
    dialogs: &mut D,
) -> EventOutcome
where
    D: MarkerDialogs + ?Sized,
{
    let Some(original) = viewer.markers().get(index).cloned() else {
        return EventOutcome::Discarded;
    };

    match dialogs.request_edit(&original, anchor) {
        EditOutcome::Cancelled => {
            log::debug!("Edit of marker {} cancelled", index);
            EventOutcome::Cancelled
        }
        EditOutcome::Deleted => {
            viewer.remove_marker(index);
            log::debug!("Deleted marker {}", index);
            viewer.request_repaint();
            EventOutcome::Deleted(index)
        }
        EditOutcome::Confirmed(edited) => {
            // Edits never move a marker
            viewer.replace_marker(index, edited.with_position(original.position));
            log::debug!("Edited marker {}", index);
            viewer.request_repaint();
            EventOutcome::Edited(index)
        }
    }
}

/// Remember where the pointer is for shortcut placement.
pub fn handle_pointer_moved(viewer: &mut FrameViewer, display: Point) -> EventOutcome {
    viewer.set_pending_pointer(display);
    EventOutcome::PointerRecorded
}

/// Place a shortcut marker at the last pointer position.
pub fn handle_key_typed(
    viewer: &mut FrameViewer,
    key: char,
    ant_ids: &dyn AntIdMemory,
    settings: &InteractionSettings,
) -> EventOutcome {
    let Some(display) = viewer.pending_pointer() else {
        log::trace!("Ignoring key {:?}: no pointer position yet", key);
        return EventOutcome::Discarded;
    };

    let placed = viewer.to_image_coordinates(display).and_then(|image_point| {
        let template = settings.shortcuts.template_for(key)?;
        Ok(template.build(image_point, ant_ids.last_ant_id()))
    });

    match placed {
        Ok(marker) => {
            let index = viewer.push_marker(marker);
            log::debug!("Shortcut {:?} created marker {}", key, index);
            viewer.request_repaint();
            EventOutcome::Created(index)
        }
        Err(e) => discard(e),
    }
}

fn discard(error: ViewerError) -> EventOutcome {
    debug_assert!(error.is_discardable());
    log::trace!("Ignoring event: {}", error);
    EventOutcome::Discarded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::{DialogAnswer, DialogRequest, LastAntId, ScriptedDialogs};
    use crate::model::{AntActivity, AntLocation, Marker};
    use crate::viewport::Size;

    fn viewer() -> FrameViewer {
        let mut viewer = FrameViewer::new(Size::new(800.0, 600.0));
        viewer.set_image(Some(Size::new(1600.0, 1200.0)));
        viewer.take_repaint();
        viewer
    }

    fn marker(location: AntLocation) -> Marker {
        Marker::new(Point::new(999.0, 999.0), AntActivity::Standing, location)
    }

    #[test]
    fn test_secondary_click_hints_interaction() {
        let mut viewer = viewer();
        let mut dialogs = ScriptedDialogs::default();
        let settings = InteractionSettings::default();

        let outcome = handle_click(
            &mut viewer,
            Point::new(100.0, 100.0),
            PointerButton::Secondary,
            &mut dialogs,
            &settings,
        );

        assert_eq!(outcome, EventOutcome::Cancelled);
        assert_eq!(
            dialogs.requests(),
            &[DialogRequest::Create {
                interaction_hint: true,
                anchor: Point::new(100.0, 100.0)
            }]
        );
        assert!(!viewer.needs_repaint());
    }

    #[test]
    fn test_middle_click_is_not_an_interaction() {
        let mut viewer = viewer();
        let mut dialogs = ScriptedDialogs::default();

        handle_click(
            &mut viewer,
            Point::new(10.0, 10.0),
            PointerButton::Middle,
            &mut dialogs,
            &InteractionSettings::default(),
        );

        assert!(matches!(
            dialogs.requests()[0],
            DialogRequest::Create {
                interaction_hint: false,
                ..
            }
        ));
    }

    #[test]
    fn test_created_marker_takes_click_position() {
        let mut viewer = viewer();
        let mut dialogs = ScriptedDialogs::new([DialogAnswer::Create(CreateOutcome::Confirmed(
            marker(AntLocation::Edge),
        ))]);

        let outcome = handle_click(
            &mut viewer,
            Point::new(200.0, 150.0),
            PointerButton::Primary,
            &mut dialogs,
            &InteractionSettings::default(),
        );

        assert_eq!(outcome, EventOutcome::Created(0));
        assert_eq!(viewer.markers()[0].position, Point::new(400.0, 300.0));
        assert_eq!(viewer.markers()[0].location, AntLocation::Edge);
        assert!(viewer.needs_repaint());
    }

    #[test]
    fn test_cancelled_edit_changes_nothing() {
        let mut viewer = viewer();
        viewer.push_marker(marker(AntLocation::Outside).with_position(Point::new(400.0, 300.0)));
        let before = viewer.markers().to_vec();
        let mut dialogs = ScriptedDialogs::new([DialogAnswer::Edit(EditOutcome::Cancelled)]);

        let outcome = handle_click(
            &mut viewer,
            Point::new(201.0, 151.0),
            PointerButton::Primary,
            &mut dialogs,
            &InteractionSettings::default(),
        );

        assert_eq!(outcome, EventOutcome::Cancelled);
        assert_eq!(viewer.markers(), before.as_slice());
        assert!(!viewer.needs_repaint());
    }

    #[test]
    fn test_edit_dialog_is_anchored_at_display_point() {
        let mut viewer = viewer();
        viewer.push_marker(marker(AntLocation::Outside).with_position(Point::new(400.0, 300.0)));
        let mut dialogs = ScriptedDialogs::default();

        handle_click(
            &mut viewer,
            Point::new(200.0, 150.0),
            PointerButton::Secondary,
            &mut dialogs,
            &InteractionSettings::default(),
        );

        match &dialogs.requests()[0] {
            DialogRequest::Edit { marker, anchor } => {
                assert_eq!(*anchor, Point::new(200.0, 150.0));
                assert_eq!(marker.position, Point::new(400.0, 300.0));
            }
            other => panic!("expected edit request, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_hit_radius() {
        let mut viewer = viewer();
        viewer.push_marker(marker(AntLocation::Outside).with_position(Point::new(400.0, 300.0)));
        let settings = InteractionSettings {
            hit_radius: 30.0,
            ..InteractionSettings::default()
        };
        let mut dialogs = ScriptedDialogs::new([DialogAnswer::Edit(EditOutcome::Deleted)]);

        // 20 image pixels away: outside the default radius, inside this one
        let outcome = handle_click(
            &mut viewer,
            Point::new(210.0, 150.0),
            PointerButton::Primary,
            &mut dialogs,
            &settings,
        );

        assert_eq!(outcome, EventOutcome::Deleted(0));
        assert!(viewer.markers().is_empty());
    }

    #[test]
    fn test_key_without_pointer_is_discarded() {
        let mut viewer = viewer();
        let outcome = handle_key_typed(
            &mut viewer,
            't',
            &LastAntId::new(Some(1)),
            &InteractionSettings::default(),
        );
        assert_eq!(outcome, EventOutcome::Discarded);
        assert!(viewer.markers().is_empty());
    }

    #[test]
    fn test_unbound_key_is_discarded() {
        let mut viewer = viewer();
        handle_pointer_moved(&mut viewer, Point::new(5.0, 5.0));

        let outcome = handle_key_typed(
            &mut viewer,
            'q',
            &LastAntId::default(),
            &InteractionSettings::default(),
        );
        assert_eq!(outcome, EventOutcome::Discarded);
        assert!(viewer.markers().is_empty());
        assert!(!viewer.needs_repaint());
    }

    #[test]
    fn test_key_uses_current_geometry() {
        let mut viewer = viewer();
        handle_pointer_moved(&mut viewer, Point::new(0.0, 10.0));

        // After the resize the frame is letterboxed and (0, 10) is above it
        viewer.resize(Size::new(1000.0, 800.0));
        viewer.take_repaint();

        let outcome = handle_key_typed(
            &mut viewer,
            'e',
            &LastAntId::default(),
            &InteractionSettings::default(),
        );
        assert_eq!(outcome, EventOutcome::Discarded);
    }

    #[test]
    fn test_pointer_move_does_not_repaint() {
        let mut viewer = viewer();
        let outcome = handle_pointer_moved(&mut viewer, Point::new(1.0, 2.0));
        assert_eq!(outcome, EventOutcome::PointerRecorded);
        assert_eq!(viewer.pending_pointer(), Some(Point::new(1.0, 2.0)));
        assert!(!viewer.needs_repaint());
    }

    #[test]
    fn test_dispatch() {
        let mut viewer = viewer();
        let mut dialogs = ScriptedDialogs::default();
        let memory = LastAntId::new(Some(9));
        let settings = InteractionSettings::default();

        let moved = handle_event(
            &mut viewer,
            CanvasEvent::PointerMoved { x: 400.0, y: 300.0 },
            &mut dialogs,
            &memory,
            &settings,
        );
        let typed = handle_event(
            &mut viewer,
            CanvasEvent::KeyTyped { key: 'o' },
            &mut dialogs,
            &memory,
            &settings,
        );

        assert_eq!(moved, EventOutcome::PointerRecorded);
        assert_eq!(typed, EventOutcome::Created(0));
        assert_eq!(viewer.markers()[0].ant_id, Some(9));
        assert_eq!(viewer.markers()[0].location, AntLocation::Outside);
    }
}
