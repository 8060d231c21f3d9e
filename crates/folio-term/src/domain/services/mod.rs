//! Terminal engine and the services driving it.
//!
//! The session, animator, history and command table hold all terminal
//! semantics and know nothing about the screen. The app state, events and
//! actions services connect them to crossterm input and external effects.

pub mod actions;
mod animator;
mod app_state;
mod cadence;
pub mod commands;
pub mod content;
pub mod events;
mod history;
mod scroll;
mod session;

pub use animator::*;
pub use app_state::*;
pub use cadence::*;
pub use commands::CommandRegistry;
pub use commands::Lookup;
pub use history::*;
pub use scroll::*;
pub use session::*;
