use super::OptionDef;
use crate::PluginError;
use crate::eval::{Evaluator, Report, Severity, Status, aggregator};
use crate::perf::Measurement;
use crate::range::{RangeMode, ThresholdSet};
use clap::{Arg, ArgAction, Command, value_parser};
use std::collections::BTreeMap;
use std::ffi::OsString;

const LOG_TARGET: &str = "    plugin";

const VERBOSE_ID: &str = "verbose";
const ARGUMENTS_ID: &str = "arguments";

const RESERVED_NAMES: [&str; 6] = ["help", "version", VERBOSE_ID, "warning", "critical", ARGUMENTS_ID];
const RESERVED_FLAGS: [char; 5] = ['h', 'V', 'v', 'w', 'c'];

/// State that only exists once the command line has been parsed.
#[derive(Debug)]
struct Started {
    values: BTreeMap<String, String>,
    arguments: Vec<String>,
    verbosity: u8,
    evaluator: Evaluator,
}

/// A monitoring plugin: its options, thresholds, measurements and final status.
#[derive(Debug)]
pub struct Plugin {
    name: String,
    description: String,
    version: String,
    range_mode: RangeMode,
    arguments_name: String,
    arguments_help: String,
    options: Vec<OptionDef>,
    warning: Option<bool>,
    critical: Option<bool>,
    message: Option<String>,
    started: Option<Started>,
}

impl Plugin {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            version: version.into(),
            range_mode: RangeMode::default(),
            arguments_name: "ARGS".to_string(),
            arguments_help: "Additional arguments".to_string(),
            options: Vec::new(),
            warning: None,
            critical: None,
            message: None,
            started: None,
        }
    }

    /// Select how ranges without a start bound are read.
    #[must_use]
    pub const fn with_range_mode(mut self, mode: RangeMode) -> Self {
        self.range_mode = mode;
        self
    }

    /// Describe the positional arguments in the usage text.
    #[must_use]
    pub fn with_arguments(mut self, value_name: impl Into<String>, help: impl Into<String>) -> Self {
        self.arguments_name = value_name.into();
        self.arguments_help = help.into();
        self
    }

    #[must_use]
    pub const fn range_mode(&self) -> RangeMode {
        self.range_mode
    }

    /// Register an option.
    ///
    /// # Errors
    ///
    /// Fails after [`start`](Self::start), or when the name or short flag is
    /// already taken.
    pub fn add_option(&mut self, def: OptionDef) -> Result<(), PluginError> {
        self.ensure_not_started()?;

        if RESERVED_NAMES.contains(&def.name()) || self.options.iter().any(|o| o.name() == def.name()) {
            return Err(PluginError::usage(format!("option '{}' is already defined", def.name())));
        }

        if let Some(flag) = def.short_flag()
            && (RESERVED_FLAGS.contains(&flag) || self.options.iter().any(|o| o.short_flag() == Some(flag)))
        {
            return Err(PluginError::usage(format!("option flag '-{flag}' is already defined")));
        }

        self.options.push(def);
        Ok(())
    }

    /// Accept `-w/--warning` or `-c/--critical` ranges.
    ///
    /// A required severity makes every measurement fail when no range exists
    /// at its slot; otherwise such measurements are simply not tested.
    ///
    /// # Errors
    ///
    /// Fails after [`start`](Self::start).
    pub fn enable_status(&mut self, severity: Severity, required: bool) -> Result<(), PluginError> {
        self.ensure_not_started()?;

        match severity {
            Severity::Warning => self.warning = Some(required),
            Severity::Critical => self.critical = Some(required),
        }

        Ok(())
    }

    /// The command-line definition built from the registered options.
    #[must_use]
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(self.name.clone())
            .about(self.description.clone())
            .version(self.version.clone())
            .arg(
                Arg::new(VERBOSE_ID)
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::Count)
                    .help("Get more verbose status output. Can be specified up to three times"),
            );

        for (severity, _) in self.enabled_statuses() {
            cmd = cmd.arg(
                Arg::new(severity.name())
                    .short(severity.flag())
                    .long(severity.name())
                    .value_name("RANGE")
                    .help(format!("Set the {severity} notification level (comma-separated for several metrics)"))
                    .action(ArgAction::Append)
                    .allow_hyphen_values(true)
                    .value_parser(value_parser!(String)),
            );
        }

        for def in &self.options {
            cmd = cmd.arg(def.to_arg());
        }

        cmd.arg(
            Arg::new(ARGUMENTS_ID)
                .value_name(self.arguments_name.clone())
                .help(self.arguments_help.clone())
                .num_args(0..)
                .action(ArgAction::Append)
                .value_parser(value_parser!(String)),
        )
    }

    /// How many times `-v` appears in `args`, without validating anything else.
    ///
    /// Lets a caller set up logging before [`start`](Self::start) runs.
    #[must_use]
    pub fn requested_verbosity<I, T>(&self, args: I) -> u8
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.command()
            .ignore_errors(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .try_get_matches_from(args)
            .map_or(0, |matches| matches.get_count(VERBOSE_ID))
    }

    /// Parse the command line and prepare for measurements.
    ///
    /// `args` includes the program name, as with [`std::env::args`].
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::Args`] for command-line problems (and for
    /// `--help`/`--version`), [`PluginError::Format`] for malformed ranges, and
    /// [`PluginError::Usage`] when called twice.
    pub fn start<I, T>(&mut self, args: I) -> Result<(), PluginError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.ensure_not_started()?;

        let matches = self.command().try_get_matches_from(args)?;

        let mut evaluator = Evaluator::new();
        for (severity, required) in self.enabled_statuses() {
            let mut ranges = ThresholdSet::new(self.range_mode);
            for text in matches.get_many::<String>(severity.name()).into_iter().flatten() {
                ranges.append_from_text(text)?;
            }

            log::debug!(target: LOG_TARGET, "{} {severity} range(s), required: {required}", ranges.len());
            evaluator.enable(severity, ranges, required);
        }

        let values = self
            .options
            .iter()
            .filter_map(|def| {
                matches
                    .get_one::<String>(def.name())
                    .map(|value| (def.name().to_string(), value.clone()))
            })
            .collect();

        let arguments = matches
            .get_many::<String>(ARGUMENTS_ID)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        self.started = Some(Started {
            values,
            arguments,
            verbosity: matches.get_count(VERBOSE_ID),
            evaluator,
        });

        Ok(())
    }

    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.started.is_some()
    }

    /// The value of a registered option, if it was given or has a default.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&str> {
        self.started.as_ref()?.values.get(name).map(String::as_str)
    }

    /// Positional arguments left over after options.
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        self.started.as_ref().map(|s| s.arguments.as_slice()).unwrap_or_default()
    }

    /// How many times `-v` was given.
    #[must_use]
    pub fn verbosity(&self) -> u8 {
        self.started.as_ref().map_or(0, |s| s.verbosity)
    }

    #[must_use]
    pub fn evaluator(&self) -> Option<&Evaluator> {
        self.started.as_ref().map(|s| &s.evaluator)
    }

    /// Evaluate and record a measurement.
    ///
    /// # Errors
    ///
    /// Fails before [`start`](Self::start), and for any reason
    /// [`Evaluator::set_value`] fails.
    pub fn set_value(&mut self, measurement: Measurement) -> Result<Status, PluginError> {
        self.started_mut()?.evaluator.set_value(measurement)
    }

    /// Set the range at `slot` for `severity` directly, replacing anything parsed.
    ///
    /// # Errors
    ///
    /// Fails before [`start`](Self::start), when `severity` is not enabled, or
    /// when `slot` would leave a gap.
    pub fn set_range(&mut self, severity: Severity, slot: usize, bottom: f64, top: f64, inverted: bool) -> Result<(), PluginError> {
        let threshold = self
            .started_mut()?
            .evaluator
            .threshold_mut(severity)
            .ok_or_else(|| PluginError::usage(format!("{severity} thresholds are not enabled")))?;

        threshold.ranges.set_slot(slot, bottom, top, inverted)
    }

    /// Text appended to the status word. `|` is replaced by a space.
    pub fn set_status_message(&mut self, message: &str) {
        self.message = Some(aggregator::sanitize_message(message));
    }

    /// The report for everything recorded so far.
    ///
    /// # Errors
    ///
    /// Fails before [`start`](Self::start).
    pub fn finish(&self) -> Result<Report, PluginError> {
        let started = self.started.as_ref().ok_or_else(not_started)?;
        Ok(started.evaluator.finalize(self.message.as_deref()))
    }

    /// The report for a plugin that cannot continue: UNKNOWN, exit code 3.
    #[must_use]
    pub fn unknown_error(message: &str) -> Report {
        aggregator::unknown(message)
    }

    fn enabled_statuses(&self) -> impl Iterator<Item = (Severity, bool)> {
        [(Severity::Warning, self.warning), (Severity::Critical, self.critical)]
            .into_iter()
            .filter_map(|(severity, required)| required.map(|r| (severity, r)))
    }

    fn ensure_not_started(&self) -> Result<(), PluginError> {
        if self.started.is_some() {
            return Err(PluginError::usage("the plugin has already been started"));
        }

        Ok(())
    }

    fn started_mut(&mut self) -> Result<&mut Started, PluginError> {
        self.started.as_mut().ok_or_else(not_started)
    }
}

fn not_started() -> PluginError {
    PluginError::usage("start must be called first")
}
