//! Output generation for the collected dataset.
//!
//! Two concerns live here, mirroring what a run produces:
//!
//! - [`csv`]: serialization of the record buffer to the CSV dataset file
//! - [`report`]: the end-of-run summary (totals, per-source breakdown,
//!   full-text count)
//!
//! Both operate on the completed buffer only; nothing here is invoked while
//! the collector is still running.

pub mod csv;
pub mod report;
