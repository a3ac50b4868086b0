//! Pure decision logic: change detection over poll results and the mapping
//! from records and failures to notification text. No I/O anywhere in this
//! crate.

pub mod diff;
pub mod interpreter;

pub use diff::records_changed;
pub use interpreter::{failure_report, interpret};
