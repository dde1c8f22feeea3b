use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// How an omitted start bound is interpreted.
///
/// Both conventions exist among deployed plugins, so the choice is made once
/// per deployment and applies to every range the plugin parses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RangeMode {
    /// An omitted start is 0, so `10` means `0:10`.
    #[default]
    ZeroFloor,

    /// An omitted start is negative infinity, so `10` means `~:10`.
    SimpleRange,
}

impl RangeMode {
    /// The bottom used when a range does not give a start.
    #[must_use]
    pub const fn default_bottom(self) -> f64 {
        match self {
            Self::ZeroFloor => 0.0,
            Self::SimpleRange => f64::NEG_INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_zero_floor_is_default() {
        assert_eq!(RangeMode::default(), RangeMode::ZeroFloor);
    }

    #[test]
    fn test_default_bottom() {
        assert!(RangeMode::ZeroFloor.default_bottom().abs() < f64::EPSILON);
        assert_eq!(RangeMode::SimpleRange.default_bottom(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_display_matches_config_spelling() {
        let names: Vec<_> = RangeMode::iter().map(|m| m.to_string()).collect();
        assert_eq!(names, ["zero-floor", "simple-range"]);
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: RangeMode,
        }

        let w: Wrapper = toml::from_str(r#"mode = "simple-range""#).unwrap();
        assert_eq!(w.mode, RangeMode::SimpleRange);

        let result: Result<Wrapper, _> = toml::from_str(r#"mode = "zero""#);
        assert!(result.is_err());
    }
}
