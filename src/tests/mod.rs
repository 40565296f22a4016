//! End-to-end tests for frame annotation.
//!
//! These tests drive the canvas handlers the way the user interface does and
//! check the resulting marker set, dialog traffic and repaint requests.

mod mapping_tests;
