//! Infrastructure layer providing external integrations.
//!
//! This module contains the implementations that reach outside the process,
//! currently the openers handing profile links to the desktop.

pub mod links;
