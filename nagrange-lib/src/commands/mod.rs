//! Command-line entry point for the generic `nagrange` check
//!
//! The check builds a [`Plugin`](crate::plugin::Plugin) with `-w/--warning`,
//! `-c/--critical` and `-m/--message`, and takes its measurements as
//! positional `NAME=VALUE[UNIT]` arguments:
//!
//! ```text
//! nagrange -w 80 -c 90 -m "root filesystem" disk=85%
//! Status Warning, root filesystem|disk=85%;80;;;
//! ```
//!
//! Deployment choices that should not vary per invocation (the range grammar
//! variant, whether thresholds are required, per-metric scale and bounds) live
//! in a TOML file named by the `NAGRANGE_CONFIG` environment variable. Without
//! it, the defaults embedded from `default_config.toml` apply.
//!
//! Every failure, whether in configuration, arguments or evaluation, is turned
//! into a `Status Unknown` line and exit code 3 here and nowhere else.

mod config;
mod host;
mod measurement_arg;
mod run;

pub use config::{Config, DEFAULT_CONFIG_TOML, MetricDecl};
pub use host::Host;
pub use run::{CONFIG_ENV, run};
