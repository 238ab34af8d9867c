//! Event layer: input handling
//!
//! Translates keyboard events into messages. The main loop polls for
//! events with a timeout, hands them to [`handle_event`] and feeds the
//! resulting message into the update layer.

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
