//! Threshold evaluation and status aggregation
//!
//! # Implementation Model
//!
//! An [`Evaluator`] owns the warning and critical [`ThresholdSet`]s for a run
//! together with every [`MetricRecord`] produced so far. Each call to
//! [`Evaluator::set_value`] checks one measurement:
//!
//! 1. The warning range at the measurement's slot is consulted first, then the
//!    critical range. A violated range sets the record's state to that
//!    severity, so critical overrides warning when both fire.
//! 2. A severity with fewer ranges than the slot is skipped unless it was
//!    marked required, in which case evaluation fails.
//! 3. The record replaces any earlier record with the same name.
//!
//! The [`aggregator`] turns the records into the final [`Report`]: the highest
//! state wins, and the status line carries one performance token per record.
//!
//! [`ThresholdSet`]: crate::range::ThresholdSet
//! [`MetricRecord`]: crate::perf::MetricRecord

pub mod aggregator;
mod evaluator;
mod status;

pub use aggregator::Report;
pub use evaluator::{Evaluator, Threshold};
pub use status::{Severity, Status};
