use super::{RangeMode, RangePredicate};
use crate::PluginError;

const LOG_TARGET: &str = "     range";

/// Parse a single range segment such as `10`, `~:10`, `10:` or `@10:20`.
///
/// Whitespace around the segment is ignored.
///
/// # Errors
///
/// Returns [`PluginError::Format`] when the text is empty or a bound is not a number.
pub fn parse_range(text: &str, mode: RangeMode) -> Result<RangePredicate, PluginError> {
    let trimmed = text.trim();
    let (inverted, body) = trimmed.strip_prefix('@').map_or((false, trimmed), |rest| (true, rest));

    if body.is_empty() {
        return Err(PluginError::format(text, "range is empty"));
    }

    let (bottom, top) = match body.split_once(':') {
        Some((start, end)) => (parse_start(start, text, mode)?, parse_end(end, text)?),
        None => (mode.default_bottom(), parse_bound(body, text)?),
    };

    log::trace!(target: LOG_TARGET, "Parsed '{trimmed}' as bottom={bottom} top={top} inverted={inverted}");

    Ok(RangePredicate::new(bottom, top, inverted, trimmed.to_string()))
}

/// Parse a comma-separated list of ranges, one predicate per segment, in order.
///
/// # Errors
///
/// Returns [`PluginError::Format`] if any segment is empty or malformed.
pub fn parse_ranges(text: &str, mode: RangeMode) -> Result<Vec<RangePredicate>, PluginError> {
    if text.trim().is_empty() {
        return Err(PluginError::format(text, "range is empty"));
    }

    text.split(',')
        .map(|segment| {
            if segment.trim().is_empty() {
                Err(PluginError::format(text, "contains an empty range"))
            } else {
                parse_range(segment, mode)
            }
        })
        .collect()
}

fn parse_start(start: &str, text: &str, mode: RangeMode) -> Result<f64, PluginError> {
    match start {
        "" => Ok(mode.default_bottom()),
        "~" => Ok(f64::NEG_INFINITY),
        _ => parse_bound(start, text),
    }
}

fn parse_end(end: &str, text: &str) -> Result<f64, PluginError> {
    if end.is_empty() { Ok(f64::INFINITY) } else { parse_bound(end, text) }
}

fn parse_bound(bound: &str, text: &str) -> Result<f64, PluginError> {
    let value: f64 = bound
        .parse()
        .map_err(|e| PluginError::format(text, format!("'{bound}' is not a number: {e}")))?;

    if value.is_nan() {
        return Err(PluginError::format(text, "NaN is not a valid bound"));
    }

    Ok(value)
}
