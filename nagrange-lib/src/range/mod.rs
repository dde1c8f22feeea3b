//! Warning/critical range grammar
//!
//! A range is written as `[@]start:end` where either bound may be omitted.
//! Each comma-separated segment of an option value becomes one
//! [`RangePredicate`], and the predicates for one severity are kept in a
//! [`ThresholdSet`] addressed by 1-based slot.
//!
//! ```text
//! range := ["@"] body
//! body  := value | start ":" end
//! start := "" | "~" | number
//! end   := "" | number
//! ```
//!
//! `~` is negative infinity and an empty end is positive infinity. What an
//! omitted start means depends on the deployment's [`RangeMode`]. A leading
//! `@` inverts the predicate so that it is violated inside the bounds rather
//! than outside them.

mod parser;
mod range_mode;
mod range_predicate;
mod threshold_set;

pub use parser::{parse_range, parse_ranges};
pub use range_mode::RangeMode;
pub use range_predicate::RangePredicate;
pub use threshold_set::ThresholdSet;
