//! Gallery pipeline: validate the requested range, build view models for the
//! fetched entries, track the detail modal and order overlapping queries.

pub mod facts;
pub mod modal;
pub mod sequence;
pub mod validate;
pub mod view;

pub use facts::{SpaceFact, SPACE_FACTS};
pub use modal::{CloseTrigger, ModalOverlay, ModalPresenter, ModalState};
pub use sequence::{QuerySequencer, QueryTicket};
pub use validate::{DateRange, ValidationError};
pub use view::{CardKind, CardView, ModalMedia, ModalView};
