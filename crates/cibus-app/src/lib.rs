//! Application state for vendor search: the query controller, the result list,
//! hover highlighting and the event loop tying them to a map.

pub mod controller;
pub mod events;
pub mod hover;
pub mod listing;
pub mod notify;
pub mod store;

pub use controller::{Completion, ControllerError, QueryController, SearchTicket, SubmitError};
pub use events::{Session, UiEvent};
pub use listing::{ResultList, VendorListItem};
pub use notify::{Notification, Notifier, TracingNotifier};
pub use store::{ResultStore, SearchPhase};
