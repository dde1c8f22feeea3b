use super::{RangeMode, RangePredicate, parse_ranges};
use crate::PluginError;

/// The ordered ranges configured for one severity, addressed by 1-based slot.
///
/// Plugins that report several metrics with different scales pass one range
/// per metric (`-w 10,80:90`), and each metric picks its range by slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThresholdSet {
    mode: RangeMode,
    ranges: Vec<RangePredicate>,
}

impl ThresholdSet {
    #[must_use]
    pub const fn new(mode: RangeMode) -> Self {
        Self { mode, ranges: Vec::new() }
    }

    /// Parse a threshold set from comma-separated range text.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::Format`] if any segment is malformed.
    pub fn parse(text: &str, mode: RangeMode) -> Result<Self, PluginError> {
        let mut set = Self::new(mode);
        set.append_from_text(text)?;
        Ok(set)
    }

    #[must_use]
    pub const fn mode(&self) -> RangeMode {
        self.mode
    }

    /// Append every range in `text`, in order.
    ///
    /// Nothing is appended unless every segment parses.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::Format`] if any segment is malformed.
    pub fn append_from_text(&mut self, text: &str) -> Result<(), PluginError> {
        let parsed = parse_ranges(text, self.mode)?;
        self.ranges.extend(parsed);
        Ok(())
    }

    /// Replace the range at `slot`, or append it when `slot` is one past the end.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::Sequence`] if `slot` is 0 or would leave a gap,
    /// and [`PluginError::Usage`] if either bound is `NaN`.
    pub fn set_slot(&mut self, slot: usize, bottom: f64, top: f64, inverted: bool) -> Result<(), PluginError> {
        if bottom.is_nan() || top.is_nan() {
            return Err(PluginError::usage(format!("range bounds for slot {slot} must not be NaN")));
        }

        let len = self.ranges.len();
        if slot == 0 || slot > len + 1 {
            return Err(PluginError::Sequence { slot, len });
        }

        let range = RangePredicate::from_bounds(bottom, top, inverted, self.mode);
        if slot == len + 1 {
            self.ranges.push(range);
        } else {
            self.ranges[slot - 1] = range;
        }

        Ok(())
    }

    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&RangePredicate> {
        slot.checked_sub(1).and_then(|index| self.ranges.get(index))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.ranges.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RangePredicate> {
        self.ranges.iter()
    }
}
