//! Reusable view components

pub mod flash;
pub mod modal;
pub mod navigation;
pub mod statusbar;
