//! Backend layer: asynchronous service calls
//!
//! Bridges the synchronous main loop and the async quotedeck-core API.
//! Every call spawns a task; the result comes back through the message
//! channel as a [`crate::message::BackendMessage`].

mod quote_service;

pub use quote_service::QuoteService;
