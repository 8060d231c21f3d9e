//! Configuration management for the terminal interface.
//!
//! This module provides centralized configuration handling for the prompt,
//! typing cadence, link opening, and other customizable aspects of the terminal.

mod config;

pub use config::*;
