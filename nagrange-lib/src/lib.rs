#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Threshold ranges and status evaluation for monitoring plugins
//!
//! This library turns the compact warning/critical range syntax used by
//! Nagios-compatible plugins into numeric predicates, evaluates named
//! measurements against them, and renders the single status line a
//! monitoring supervisor expects.
//!
//! # Module Organization
//!
//! - [`range`]: Range grammar parsing and per-severity threshold sets
//! - [`perf`]: Measurements, units of measure and performance tokens
//! - [`eval`]: Per-metric evaluation and overall status aggregation
//! - [`plugin`]: The plugin lifecycle (options, start, values, finish)
//! - [`commands`]: The generic `nagrange` check built on top of [`plugin`]

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

mod error;

pub mod commands;
pub mod eval;
pub mod perf;
pub mod plugin;
pub mod range;

pub use crate::commands::{CONFIG_ENV, Host, run};
pub use crate::error::PluginError;
