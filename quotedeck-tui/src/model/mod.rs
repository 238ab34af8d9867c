//! Model layer: application state definitions
//!
//! The model is the single source of truth. This layer holds pure data
//! structures only; every mutation goes through the update layer.

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavItemId, NavigationState};
pub use page::Page;
pub use state::{FlashState, Modal, ModalState, ProfileState, QuotesState};
