//! In-memory state for the bounty program admin screen: the program table
//! with its sort engine, the per-form asset collection, the create-program
//! form and the widgets around it.

pub mod asset_collection;
pub mod date_picker;
pub mod error;
pub mod form;
pub mod program_store;
pub mod seed;
pub mod session;
pub mod sort;
pub mod subscription;

pub use asset_collection::AssetCollection;
pub use date_picker::{CalendarCell, CalendarView, CellKind, DatePicker};
pub use error::{AssetError, SessionError, SubmitError};
pub use form::{AssetDraft, ProgramForm, INVALID_WEBSITE_MESSAGE};
pub use program_store::ProgramStore;
pub use session::AdminSession;
pub use sort::SortState;
pub use subscription::SubscriptionSummary;
