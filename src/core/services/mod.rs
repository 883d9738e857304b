pub mod entry_service;
pub mod intake_service;
pub mod summary_service;
pub mod target_service;

pub use entry_service::EntryService;
pub use intake_service::{IntakeOutcome, IntakeReply, IntakeRequest, IntakeResponse, IntakeService};
pub use summary_service::{DayCell, PeriodSummary, SummaryService, TrendPoint};
pub use target_service::TargetService;
