use strum::{Display, EnumIter};

/// The outcome reported to the monitoring supervisor, ordered by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum Status {
    #[default]
    Ok,
    Warning,
    Critical,

    /// Reserved for operational failures, never the result of a measurement.
    Unknown,
}

impl Status {
    /// The process exit code the supervisor expects for this status.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }
}

/// A threshold class a range can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Warning,
    Critical,
}

impl Severity {
    /// Short command-line flag for this severity's ranges.
    #[must_use]
    pub const fn flag(self) -> char {
        match self {
            Self::Warning => 'w',
            Self::Critical => 'c',
        }
    }

    /// Long command-line option name for this severity's ranges.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl From<Severity> for Status {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => Self::Warning,
            Severity::Critical => Self::Critical,
        }
    }
}
