//! Page state module
//!
//! Data structures for each page plus the modal and flash banner state.

mod flash;
mod modal;
mod profile;
mod quotes;

pub use flash::{FlashCategory, FlashState};
pub use modal::{FieldLocks, Modal, ModalState, QuoteForm};
pub use profile::{ProfileForm, ProfileState, SelectField};
pub use quotes::QuotesState;
