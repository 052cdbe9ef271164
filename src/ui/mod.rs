//! Terminal rendering for the range editor.
pub mod model;
pub mod render;
