//! Frame viewer - point annotation of ant activity on still video frames.
//!
//! Scales a frame into a display surface, maps pointer positions between
//! display and image coordinates, and turns clicks and shortcut keys into
//! marker edits.

pub mod config;
pub mod constants;
pub mod dialog;
pub mod error;
pub mod handlers;
pub mod keybindings;
pub mod message;
pub mod model;
pub mod session;
pub mod viewer;
pub mod viewport;

#[cfg(test)]
mod tests;

pub use error::ViewerError;
pub use viewer::FrameViewer;
