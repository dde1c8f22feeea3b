use crate::PluginError;

/// A named observation waiting to be evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    name: String,
    value: f64,
    min: Option<f64>,
    max: Option<f64>,
    scale: Option<String>,
    slot: usize,
}

impl Measurement {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            min: None,
            max: None,
            scale: None,
            slot: 1,
        }
    }

    /// Create a measurement from text, coercing it to a number.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::NotNumeric`] if the text is not a number or is `NaN`.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, PluginError> {
        let name = name.into();
        match text.trim().parse::<f64>() {
            Ok(value) if !value.is_nan() => Ok(Self::new(name, value)),
            _ => Err(PluginError::NotNumeric {
                name,
                text: text.to_string(),
            }),
        }
    }

    /// Lowest possible value, echoed in the performance data.
    #[must_use]
    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Highest possible value, echoed in the performance data.
    #[must_use]
    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Unit of measure. Validated when the measurement is recorded.
    #[must_use]
    pub fn with_scale(mut self, scale: impl Into<String>) -> Self {
        self.scale = Some(scale.into());
        self
    }

    /// Which of the configured ranges (1-based) this measurement is tested against.
    #[must_use]
    pub const fn with_slot(mut self, slot: usize) -> Self {
        self.slot = slot;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub const fn min(&self) -> Option<f64> {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> Option<f64> {
        self.max
    }

    #[must_use]
    pub fn scale(&self) -> Option<&str> {
        self.scale.as_deref()
    }

    #[must_use]
    pub const fn slot(&self) -> usize {
        self.slot
    }
}
