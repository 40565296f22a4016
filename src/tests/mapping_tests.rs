//! Tests for display/image mapping as seen through the canvas handlers.

use crate::dialog::{DialogAnswer, DialogRequest, EditOutcome, ScriptedDialogs};
use crate::handlers::{InteractionSettings, handle_click};
use crate::message::{EventOutcome, PointerButton};
use crate::model::{AntActivity, AntLocation, Marker, Point};
use crate::viewer::FrameViewer;
use crate::viewport::{Size, ViewportGeometry};

/// Square frame shown at natural size, so display and image points coincide.
fn unscaled_viewer() -> FrameViewer {
    let mut viewer = FrameViewer::new(Size::new(1024.0, 1024.0));
    viewer.set_image(Some(Size::new(1024.0, 1024.0)));
    viewer
        .set_markers(Some(
            &[Marker::new(
                Point::new(512.0, 512.0),
                AntActivity::Walking,
                AntLocation::Edge,
            )][..],
        ))
        .unwrap();
    viewer.take_repaint();
    viewer
}

fn click_outcome(viewer: &mut FrameViewer, x: f64, y: f64) -> EventOutcome {
    let mut dialogs = ScriptedDialogs::new([DialogAnswer::Edit(EditOutcome::Cancelled)]);
    handle_click(
        viewer,
        Point::new(x, y),
        PointerButton::Primary,
        &mut dialogs,
        &InteractionSettings::default(),
    )
}

#[test]
fn test_click_at_hit_radius_edits() {
    let mut viewer = unscaled_viewer();
    let mut dialogs = ScriptedDialogs::new([DialogAnswer::Edit(EditOutcome::Deleted)]);

    let outcome = handle_click(
        &mut viewer,
        Point::new(518.0, 512.0),
        PointerButton::Primary,
        &mut dialogs,
        &InteractionSettings::default(),
    );

    assert_eq!(outcome, EventOutcome::Deleted(0));
}

#[test]
fn test_click_just_beyond_hit_radius_creates() {
    let mut viewer = unscaled_viewer();
    let mut dialogs = ScriptedDialogs::default();

    handle_click(
        &mut viewer,
        Point::new(518.000001, 512.0),
        PointerButton::Primary,
        &mut dialogs,
        &InteractionSettings::default(),
    );

    assert!(matches!(
        dialogs.requests()[0],
        DialogRequest::Create { .. }
    ));
}

#[test]
fn test_hit_radius_in_image_pixels_not_display_pixels() {
    // 1600x1200 frame on an 800x600 surface: one display pixel is two image pixels
    let mut viewer = FrameViewer::new(Size::new(800.0, 600.0));
    viewer.set_image(Some(Size::new(1600.0, 1200.0)));
    viewer.push_marker(Marker::new(
        Point::new(800.0, 600.0),
        AntActivity::Walking,
        AntLocation::Edge,
    ));

    // 1.5625 display pixels = 3.125 image pixels: hit
    assert_eq!(click_outcome(&mut viewer, 401.5625, 300.0), EventOutcome::Cancelled);

    // 3.125 display pixels = 6.25 image pixels: miss, the create dialog is asked instead
    let mut dialogs = ScriptedDialogs::default();
    handle_click(
        &mut viewer,
        Point::new(403.125, 300.0),
        PointerButton::Primary,
        &mut dialogs,
        &InteractionSettings::default(),
    );
    assert!(matches!(
        dialogs.requests()[0],
        DialogRequest::Create { .. }
    ));
}

#[test]
fn test_frame_boundary_is_clickable() {
    let mut viewer = FrameViewer::new(Size::new(1000.0, 800.0));
    viewer.set_image(Some(Size::new(1600.0, 1200.0)));

    for (x, y) in [(0.0, 25.0), (1000.0, 25.0), (0.0, 775.0), (1000.0, 775.0)] {
        assert!(viewer.to_image_coordinates(Point::new(x, y)).is_ok(), "({x}, {y})");
    }
    for (x, y) in [(0.0, 24.9), (500.0, 775.1), (-0.1, 400.0), (1000.1, 400.0)] {
        assert!(viewer.to_image_coordinates(Point::new(x, y)).is_err(), "({x}, {y})");
    }
}

#[test]
fn test_glyphs_track_markers_after_resize() {
    let mut viewer = FrameViewer::new(Size::new(800.0, 600.0));
    viewer.set_image(Some(Size::new(1600.0, 1200.0)));
    viewer.push_marker(Marker::new(
        Point::new(1600.0, 1200.0),
        AntActivity::Walking,
        AntLocation::Outside,
    ));
    assert_eq!(viewer.glyphs()[0].position, Point::new(800.0, 600.0));

    viewer.resize(Size::new(1000.0, 800.0));
    let geometry = ViewportGeometry::fit(Size::new(1000.0, 800.0), Size::new(1600.0, 1200.0));
    let glyph = viewer.glyphs()[0].position;
    assert!((glyph.x - (geometry.top_left_x + geometry.displayed_width)).abs() < 1e-9);
    assert!((glyph.y - (geometry.top_left_y + geometry.displayed_height)).abs() < 1e-9);
}
