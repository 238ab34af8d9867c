//! Message layer: event message definitions
//!
//! The bridge between Event and Update. Every user action and state
//! change is expressed as a message; the event layer translates raw
//! terminal events into messages and the update layer consumes them to
//! mutate the model. Backend tasks report their results through the
//! same channel as [`BackendMessage`] wrapped in [`AppMessage::Backend`].

mod app;
mod backend;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
