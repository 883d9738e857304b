//! Pure domain models for the hours calendar: daily entries, monthly targets,
//! session identity, and calendar period helpers. No I/O lives here.

pub mod common;
pub mod entry;
pub mod period;
pub mod session;

pub use common::{Identifiable, Owned};
pub use entry::{DailyEntry, EntryPatch, MonthlyTarget};
pub use period::{DateWindow, DateWindowError};
pub use session::Session;
