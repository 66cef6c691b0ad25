//! # case-store
//!
//! Client-side result stores for casedesk.
//!
//! Filter applies and notification polls can overlap: a slow response for
//! an old request must never clobber the results of a newer one. The
//! [`seq::Sequencer`] hands out monotonically increasing tickets; a store
//! only commits a completion carrying the newest ticket and discards the
//! rest. Failed refreshes keep the last good data and record the error
//! alongside it instead of blanking the view.

pub mod case_list;
pub mod notifications;
pub mod seq;

pub use case_list::{ApplyOutcome, CaseListStore, ListSnapshot};
pub use notifications::{NotificationSnapshot, NotificationStore};
pub use seq::{Sequencer, Ticket};
