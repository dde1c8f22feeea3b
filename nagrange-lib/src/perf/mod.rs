//! Measurements and performance data
//!
//! A [`Measurement`] is what a plugin hands to the evaluator. Once evaluated it
//! becomes a [`MetricRecord`], which remembers the resulting state and the
//! ranges that triggered it, and which renders itself as one performance
//! token (`name=value[scale];warn;crit;min;max`).

mod measurement;
mod metric_record;
mod scale;

pub use measurement::Measurement;
pub use metric_record::MetricRecord;
pub use scale::Scale;
