//! The plugin lifecycle
//!
//! A [`Plugin`] is configured with [`OptionDef`] records and the severities it
//! reports, then started against the command line. After that it accepts
//! measurements and finally produces the [`Report`] to print.
//!
//! ```no_run
//! use nagrange_lib::eval::Severity;
//! use nagrange_lib::perf::Measurement;
//! use nagrange_lib::plugin::{OptionDef, Plugin};
//!
//! # fn main() -> Result<(), nagrange_lib::PluginError> {
//! let mut plugin = Plugin::new("check_feet", "Quantify current foot odor.", "1.0");
//! plugin.add_option(OptionDef::new("target", "Person to check for odor.").short('t').required(true))?;
//! plugin.enable_status(Severity::Warning, false)?;
//! plugin.enable_status(Severity::Critical, false)?;
//! plugin.start(std::env::args())?;
//!
//! let _ = plugin.set_value(Measurement::new("stench", 12.0))?;
//! plugin.set_status_message("Current stench level (12)");
//!
//! let report = plugin.finish()?;
//! println!("{}", report.line);
//! std::process::exit(report.exit_code);
//! # }
//! ```
//!
//! [`Report`]: crate::eval::Report

mod lifecycle;
mod option_def;

pub use lifecycle::Plugin;
pub use option_def::{OptionDef, ValueCallback};
