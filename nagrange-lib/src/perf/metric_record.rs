use super::Scale;
use crate::eval::Status;
use core::fmt::{Display, Formatter, Result as FmtResult};

/// The evaluated state of one named metric.
///
/// Renders as a performance token, `name=value[scale];warn;crit;min;max`,
/// where absent fields are left empty.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    pub name: String,
    pub value: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub scale: Option<Scale>,
    pub slot: usize,
    pub state: Status,

    /// Text of the warning range this value violated, if any.
    pub matched_raw_warning: Option<String>,

    /// Text of the critical range this value violated, if any.
    pub matched_raw_critical: Option<String>,
}

impl Display for MetricRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}={}", self.name, self.value)?;
        if let Some(scale) = self.scale {
            write!(f, "{scale}")?;
        }

        write!(
            f,
            ";{};{};",
            self.matched_raw_warning.as_deref().unwrap_or_default(),
            self.matched_raw_critical.as_deref().unwrap_or_default()
        )?;

        if let Some(min) = self.min {
            write!(f, "{min}")?;
        }

        f.write_str(";")?;

        if let Some(max) = self.max {
            write!(f, "{max}")?;
        }

        Ok(())
    }
}
