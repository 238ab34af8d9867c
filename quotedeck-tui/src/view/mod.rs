//! View layer: rendering
//!
//! Reads the model and draws the frame. Never mutates state.

pub mod components;
mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
