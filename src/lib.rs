//! Terminal form builder for select-type fields.
//!
//! A field definition is edited in a `ratatui` interface and posted as JSON
//! to a configurable endpoint.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod field;
pub mod state;
pub mod submit;
pub mod ui;
