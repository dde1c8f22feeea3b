use super::{Report, Severity, Status, aggregator};
use crate::PluginError;
use crate::perf::{Measurement, MetricRecord, Scale};
use crate::range::ThresholdSet;

const LOG_TARGET: &str = "      eval";

/// The ranges for one severity and whether a measurement may go untested.
#[derive(Debug, Clone, PartialEq)]
pub struct Threshold {
    pub ranges: ThresholdSet,

    /// When set, a measurement whose slot has no range is an error rather than skipped.
    pub required: bool,
}

/// Evaluates measurements against the warning and critical thresholds and keeps the results.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    warning: Option<Threshold>,
    critical: Option<Threshold>,
    records: Vec<MetricRecord>,
}

impl Evaluator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn on checks for `severity` using `ranges`.
    pub fn enable(&mut self, severity: Severity, ranges: ThresholdSet, required: bool) {
        *self.slot_mut(severity) = Some(Threshold { ranges, required });
    }

    #[must_use]
    pub const fn threshold(&self, severity: Severity) -> Option<&Threshold> {
        match severity {
            Severity::Warning => self.warning.as_ref(),
            Severity::Critical => self.critical.as_ref(),
        }
    }

    pub const fn threshold_mut(&mut self, severity: Severity) -> Option<&mut Threshold> {
        match severity {
            Severity::Warning => self.warning.as_mut(),
            Severity::Critical => self.critical.as_mut(),
        }
    }

    const fn slot_mut(&mut self, severity: Severity) -> &mut Option<Threshold> {
        match severity {
            Severity::Warning => &mut self.warning,
            Severity::Critical => &mut self.critical,
        }
    }

    /// Evaluate a measurement, store its record, and return its state.
    ///
    /// # Errors
    ///
    /// Fails if the slot is 0, the value is `NaN`, the scale is not recognized, or a required
    /// threshold has no range at the measurement's slot. Nothing is recorded
    /// when this fails.
    pub fn set_value(&mut self, measurement: Measurement) -> Result<Status, PluginError> {
        let slot = measurement.slot();
        if slot == 0 {
            return Err(PluginError::usage(format!(
                "threshold slot for '{}' must be at least 1",
                measurement.name()
            )));
        }

        if measurement.value().is_nan() {
            return Err(PluginError::NotNumeric {
                name: measurement.name().to_string(),
                text: measurement.value().to_string(),
            });
        }

        let scale = measurement.scale().map(str::parse::<Scale>).transpose()?;

        let mut record = MetricRecord {
            name: measurement.name().to_string(),
            value: measurement.value(),
            min: measurement.min(),
            max: measurement.max(),
            scale,
            slot,
            state: Status::Ok,
            matched_raw_warning: None,
            matched_raw_critical: None,
        };

        // warning before critical, so a violated critical range always has the last word
        for severity in [Severity::Warning, Severity::Critical] {
            let Some(threshold) = self.threshold(severity) else {
                continue;
            };

            let Some(range) = threshold.ranges.get(slot) else {
                if threshold.required {
                    return Err(PluginError::MissingThreshold { severity, slot });
                }

                log::debug!(target: LOG_TARGET, "No {severity} range at slot {slot} for '{}', skipping", record.name);
                continue;
            };

            if range.is_violated_by(record.value) {
                log::info!(target: LOG_TARGET, "'{}' = {} is {severity} (range '{range}')", record.name, record.value);
                record.state = severity.into();
                let matched = Some(range.raw().to_string());
                match severity {
                    Severity::Warning => record.matched_raw_warning = matched,
                    Severity::Critical => record.matched_raw_critical = matched,
                }
            }
        }

        let state = record.state;
        self.store(record);
        Ok(state)
    }

    fn store(&mut self, record: MetricRecord) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.name == record.name) {
            *existing = record;
        } else {
            self.records.push(record);
        }
    }

    /// Records in the order their names were first set.
    #[must_use]
    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    #[must_use]
    pub fn record(&self, name: &str) -> Option<&MetricRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// The highest state among all records, or [`Status::Ok`] when there are none.
    #[must_use]
    pub fn overall_status(&self) -> Status {
        aggregator::overall_status(&self.records)
    }

    /// Build the final report, optionally with a free-text status message.
    #[must_use]
    pub fn finalize(&self, message: Option<&str>) -> Report {
        aggregator::finalize(&self.records, message)
    }
}
