use super::RangeMode;
use core::fmt::{Display, Formatter, Result as FmtResult};

/// One parsed range: a pair of bounds plus a polarity flag.
///
/// `bottom <= top` is not enforced. The source text is kept so it can be
/// echoed back in performance output.
#[derive(Debug, Clone, PartialEq)]
pub struct RangePredicate {
    bottom: f64,
    top: f64,
    inverted: bool,
    raw: String,
}

impl RangePredicate {
    #[must_use]
    pub(crate) const fn new(bottom: f64, top: f64, inverted: bool, raw: String) -> Self {
        Self { bottom, top, inverted, raw }
    }

    /// Build a predicate from bounds, synthesizing its text in range syntax.
    ///
    /// The start is elided when it equals the mode's default bottom, so the
    /// text parses back to the same predicate under the same mode.
    #[must_use]
    pub fn from_bounds(bottom: f64, top: f64, inverted: bool, mode: RangeMode) -> Self {
        let raw = render(bottom, top, inverted, mode);
        Self::new(bottom, top, inverted, raw)
    }

    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.bottom
    }

    #[must_use]
    pub const fn top(&self) -> f64 {
        self.top
    }

    #[must_use]
    pub const fn inverted(&self) -> bool {
        self.inverted
    }

    /// The range text this predicate came from.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether `value` triggers the severity this range belongs to.
    ///
    /// A plain range is violated outside `[bottom, top]`; an inverted one is
    /// violated inside it, both endpoints included.
    #[must_use]
    pub fn is_violated_by(&self, value: f64) -> bool {
        let inside = self.bottom <= value && value <= self.top;
        if self.inverted { inside } else { !inside }
    }
}

#[expect(clippy::float_cmp, reason = "The default bottom is an exact constant, not a computed value")]
fn render(bottom: f64, top: f64, inverted: bool, mode: RangeMode) -> String {
    let prefix = if inverted { "@" } else { "" };

    if bottom == mode.default_bottom() && top != f64::INFINITY {
        return format!("{prefix}{top}");
    }

    let start = if bottom == f64::NEG_INFINITY {
        "~".to_string()
    } else {
        bottom.to_string()
    };

    let end = if top == f64::INFINITY { String::new() } else { top.to_string() };

    format!("{prefix}{start}:{end}")
}

impl Display for RangePredicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.raw)
    }
}
