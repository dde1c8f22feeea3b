//! The generic `nagrange` check

use super::config::Config;
use super::measurement_arg::parse_measurement;
use crate::eval::{Report, Severity};
use crate::plugin::{OptionDef, Plugin};
use crate::{Host, PluginError, Result};
use camino::Utf8PathBuf;
use ohno::IntoAppError;
use std::ffi::OsString;
use std::io::Write;

const LOG_TARGET: &str = "  nagrange";

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "NAGRANGE_CONFIG";

const MESSAGE_OPTION: &str = "message";

/// Run one check: parse the command line, evaluate every measurement and report.
///
/// Exactly one status line is written to the host's output, followed by a call
/// to [`Host::exit`] with the plugin exit code. Configuration and plugin
/// failures are reported as an UNKNOWN status rather than returned.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error only if the host's output cannot be written
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    H: Host,
{
    let config_path = std::env::var(CONFIG_ENV).ok().filter(|p| !p.is_empty()).map(Utf8PathBuf::from);

    let config = match Config::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => return fail(host, &e.to_string()),
    };

    match check(&config, args) {
        Ok(result) => report(host, &result),
        Err(e) if e.is_informational() => {
            write!(host.output(), "{e}").into_app_err("writing help output")?;
            host.exit(0);
            Ok(())
        }
        Err(e) => {
            log::debug!(target: LOG_TARGET, "Check failed: {e}");
            fail(host, &e.to_string())
        }
    }
}

fn check<I, T>(config: &Config, args: I) -> Result<Report, PluginError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut plugin = Plugin::new(
        "nagrange",
        "Evaluate measurements against warning and critical threshold ranges",
        env!("CARGO_PKG_VERSION"),
    )
    .with_range_mode(config.range_mode)
    .with_arguments("MEASUREMENT", "Measurements to check, each as NAME=VALUE[UNIT]");

    plugin.add_option(OptionDef::new(MESSAGE_OPTION, "Text to show after the status word").short('m'))?;
    plugin.enable_status(Severity::Warning, config.warning_required)?;
    plugin.enable_status(Severity::Critical, config.critical_required)?;

    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    init_logging(plugin.requested_verbosity(&args));
    plugin.start(&args)?;

    log::debug!(target: LOG_TARGET, "Checking with {} ranges", config.range_mode);

    let measurements = plugin.arguments().to_vec();
    for arg in &measurements {
        let measurement = parse_measurement(arg, config)?;
        let _ = plugin.set_value(measurement)?;
    }

    if let Some(message) = plugin.option(MESSAGE_OPTION).map(str::to_string) {
        plugin.set_status_message(&message);
    }

    plugin.finish()
}

fn report<H: Host>(host: &mut H, report: &Report) -> Result<()> {
    writeln!(host.output(), "{}", report.line).into_app_err("writing status line")?;
    host.exit(report.exit_code);
    Ok(())
}

/// Report `error` as UNKNOWN on the output, keeping its full text on the error stream.
fn fail<H: Host>(host: &mut H, error: &str) -> Result<()> {
    let _ = writeln!(host.error(), "{}", error.trim_end());
    report(host, &Plugin::unknown_error(&summary_line(error)))
}

/// The first paragraph of `text` folded onto one line.
fn summary_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .skip_while(|line| line.is_empty())
        .take_while(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(verbosity >= 2)
        .target(env_logger::Target::Stdout)
        .try_init();
}
