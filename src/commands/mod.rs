//! Front-end command handlers
//!
//! The operations a front end binds to its Search and Export actions.
//! Errors come back as display strings ready to show the user.

mod export;
mod search;

pub use export::*;
pub use search::*;
