//! # Sunpaper Library
//!
//! Internal library for the sunpaper binary.
//!
//! This library exists to enable testing of the pipeline and to keep CLI
//! dispatch (main.rs) apart from the lookup and classification logic.
//!
//! ## Architecture
//!
//! - **Entry Point**: `Sunpaper` runs one selection for a validated coordinate
//! - **Geographic**: `geo` validates coordinates and resolves the timezone and
//!   sun times through upstream services
//! - **Fetching**: `fetch` provides the HTTP transport and fixed-delay retry
//! - **Time**: `time` converts UTC instants into local time and abstracts "now"
//! - **Classification**: `period` maps the current instant to a wallpaper
//! - **Configuration**: `config` for the optional TOML overrides
//! - **Infrastructure**: argument parsing, constants and logging

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod config;
pub mod constants;
pub mod fetch;
pub mod geo;
pub mod period;
pub mod time;

mod sunpaper;

pub use period::DayPeriod;
pub use sunpaper::{Selection, Sunpaper, localize};
