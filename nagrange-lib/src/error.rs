use crate::eval::Severity;
use core::error::Error;
use core::fmt::{Display, Formatter, Result as FmtResult};

/// Everything that can go wrong while configuring a plugin or evaluating measurements.
///
/// None of these are recoverable: the outermost entry point reports them as an
/// UNKNOWN status and exits with code 3.
#[derive(Debug)]
pub enum PluginError {
    /// Malformed range text.
    Format { text: String, reason: String },

    /// A required threshold has no range at the slot a measurement asked for.
    MissingThreshold { severity: Severity, slot: usize },

    /// A programmatic range was set with a gap before it.
    Sequence { slot: usize, len: usize },

    /// A measurement value that is not a number.
    NotNumeric { name: String, text: String },

    /// An unrecognized unit of measure.
    InvalidScale(String),

    /// The plugin API was used out of order or with bad arguments.
    Usage(String),

    /// Command-line parsing failed, or help/version output was requested.
    Args(clap::Error),
}

impl PluginError {
    pub(crate) fn format(text: &str, reason: impl Into<String>) -> Self {
        Self::Format {
            text: text.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Whether this is help or version output rather than an actual failure.
    #[must_use]
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::Args(e) if !e.use_stderr())
    }
}

impl Display for PluginError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Format { text, reason } => write!(f, "invalid range '{text}': {reason}"),
            Self::MissingThreshold { severity, slot } => write!(f, "slot {slot} of {severity} threshold not set"),
            Self::Sequence { slot, len } => write!(
                f,
                "cannot set threshold slot {slot} when only {len} slot(s) are defined; slots must be filled in order"
            ),
            Self::NotNumeric { name, text } => write!(f, "performance measure '{name}' must be numeric, got '{text}'"),
            Self::InvalidScale(scale) => write!(f, "invalid scale '{scale}': must be one of B, KB, MB, GB, TB, s, ms, us, ns, or %"),
            Self::Usage(message) => write!(f, "{message}"),
            Self::Args(e) => write!(f, "{e}"),
        }
    }
}

impl Error for PluginError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Args(e) => Some(e),
            _ => None,
        }
    }
}

impl From<clap::Error> for PluginError {
    fn from(e: clap::Error) -> Self {
        Self::Args(e)
    }
}
