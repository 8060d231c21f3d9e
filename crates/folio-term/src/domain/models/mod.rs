//! Plain data types shared by the terminal engine and its front end.

mod action;
mod command;
mod error;
mod event;
mod line;
mod link;
mod link_opener;

pub use action::*;
pub use command::*;
pub use error::*;
pub use event::*;
pub use line::*;
pub use link::*;
pub use link_opener::*;
