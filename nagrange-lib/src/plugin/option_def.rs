use clap::{Arg, ArgAction, value_parser};

/// Converts or validates an option's raw value; the error text is shown to the user.
pub type ValueCallback = fn(&str) -> Result<String, String>;

/// One command-line option a plugin accepts.
///
/// The option is always `--<name> <NAME>`, with an optional one-letter short
/// form. Its parsed value is available from [`Plugin::option`] under `name`.
///
/// [`Plugin::option`]: super::Plugin::option
#[derive(Debug, Clone)]
pub struct OptionDef {
    name: String,
    short: Option<char>,
    help: String,
    required: bool,
    default: Option<String>,
    parser: Option<ValueCallback>,
}

impl OptionDef {
    #[must_use]
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: None,
            help: help.into(),
            required: false,
            default: None,
            parser: None,
        }
    }

    #[must_use]
    pub const fn short(mut self, flag: char) -> Self {
        self.short = Some(flag);
        self
    }

    /// Refuse to start when the option is missing.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Run `callback` on the raw value while parsing the command line.
    #[must_use]
    pub fn parser(mut self, callback: ValueCallback) -> Self {
        self.parser = Some(callback);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn short_flag(&self) -> Option<char> {
        self.short
    }

    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    pub(crate) fn to_arg(&self) -> Arg {
        let mut arg = Arg::new(self.name.clone())
            .long(self.name.clone())
            .value_name(self.name.to_uppercase())
            .help(self.help.clone())
            .required(self.required)
            .action(ArgAction::Set);

        if let Some(flag) = self.short {
            arg = arg.short(flag);
        }

        if let Some(default) = &self.default {
            arg = arg.default_value(default.clone());
        }

        match self.parser {
            Some(callback) => arg.value_parser(callback),
            None => arg.value_parser(value_parser!(String)),
        }
    }
}
