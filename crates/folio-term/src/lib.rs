//! Terminal engine and user interface for the Folio portfolio shell.
//!
//! This crate provides a terminal session that dispatches portfolio commands,
//! types their output character by character, and recalls previous input.
//! The ratatui front end and the link opener are layered on top of it.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Action, CommandName, CommandOutcome, Event, Line, LineStyle, Link};
pub use domain::services::{AppStateProps, Dispatch, SessionOptions, TerminalSession};
pub use infrastructure::links::LinkOpenerManager;
