//! Application state management module.
//!
//! This module contains the state the user interface renders and mutates:
//! - Main `State` struct wrapping the field form controller
//! - Navigation types (Focus)
//! - State error handling

mod error;
mod navigation;

pub use error::StateError;
pub use navigation::Focus;

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
