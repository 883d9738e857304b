//! Calendar logic: RAG classification, hour aggregation, progress evaluation,
//! and the services that combine them with the entry store.

pub mod aggregate;
pub mod errors;
pub mod progress;
pub mod rag;
pub mod services;
pub mod time;
pub mod utils;

pub use aggregate::{aggregate, remaining_planned, HourTotals};
pub use errors::{Result, TrackerError};
pub use progress::{evaluate_progress, ProgressLabel};
pub use rag::{classify, RagStatus, RagStatusResult, AMBER_THRESHOLD};
pub use time::{Clock, SystemClock};
