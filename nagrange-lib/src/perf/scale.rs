use crate::PluginError;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error as DeError;
use strum::{EnumIter, IntoEnumIterator};

/// A unit of measure understood by the performance data parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Scale {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
    Percent,
}

impl Scale {
    /// The normalized token: byte units upper case, time units lower case.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Bytes => "B",
            Self::Kilobytes => "KB",
            Self::Megabytes => "MB",
            Self::Gigabytes => "GB",
            Self::Terabytes => "TB",
            Self::Seconds => "s",
            Self::Milliseconds => "ms",
            Self::Microseconds => "us",
            Self::Nanoseconds => "ns",
            Self::Percent => "%",
        }
    }
}

impl FromStr for Scale {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|scale| scale.token().eq_ignore_ascii_case(s))
            .ok_or_else(|| PluginError::InvalidScale(s.to_string()))
    }
}

impl Display for Scale {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.token())
    }
}

impl Serialize for Scale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for Scale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_units_normalize_upper() {
        assert_eq!("kb".parse::<Scale>().unwrap(), Scale::Kilobytes);
        assert_eq!("Gb".parse::<Scale>().unwrap().to_string(), "GB");
        assert_eq!("b".parse::<Scale>().unwrap().to_string(), "B");
    }

    #[test]
    fn test_time_units_normalize_lower() {
        assert_eq!("MS".parse::<Scale>().unwrap(), Scale::Milliseconds);
        assert_eq!("S".parse::<Scale>().unwrap().to_string(), "s");
        assert_eq!("Us".parse::<Scale>().unwrap().to_string(), "us");
        assert_eq!("%".parse::<Scale>().unwrap(), Scale::Percent);
    }

    #[test]
    fn test_unknown_units_are_rejected() {
        for text in ["furlongs", "", "c", "KiB", "min", " s"] {
            let result = text.parse::<Scale>();
            assert!(matches!(result, Err(PluginError::InvalidScale(ref s)) if s == text), "'{text}' should be rejected");
        }
    }

    #[test]
    fn test_every_token_parses_back() {
        for scale in Scale::iter() {
            assert_eq!(scale.token().parse::<Scale>().unwrap(), scale);
        }
    }

    #[test]
    fn test_deserialize_rejects_unknown_unit() {
        #[derive(Debug, Deserialize)]
        struct Wrapper {
            #[expect(dead_code, reason = "Only the deserialization failure matters")]
            scale: Scale,
        }

        let result: Result<Wrapper, _> = toml::from_str(r#"scale = "furlongs""#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("invalid scale 'furlongs'"));
    }
}
