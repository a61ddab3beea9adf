//! # voxrun - headless driver for the voxrun simulation core
//!
//! Stands in for a presentation layer: the autopilot produces intents and
//! progress goes to the log and to text snapshots.

pub mod ascii;
pub mod autopilot;
pub mod config;
pub mod host;
pub mod runner;

pub use config::RunnerConfig;
pub use runner::{RunReport, Runner};
