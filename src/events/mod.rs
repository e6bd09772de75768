//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: field definition submission
//! - Terminal events: user input and terminal ticks

pub mod network;
pub mod terminal;
