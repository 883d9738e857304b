//! Pure text renderers; callers decide where the output goes.

pub mod calendar;
pub mod style;
pub mod summary;
pub mod trend;
