//! Core library for the `rangemask` CLI.
//!
//! The interesting part is [`editor`]: a masked `hh:mm - hh:mm` input that
//! validates each digit against the caret position, skips separators, and
//! republishes the parsed [`editor::TimeRange`] after every keystroke. The
//! remaining modules are the CLI arguments, config files and the terminal
//! rendering used by the `rangemask` binary.
pub mod args;
pub mod config;
pub mod editor;
pub mod error;
pub mod ui;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
