//! Configuration loading and application.
mod apply;
mod loader;
pub mod types;

#[cfg(test)]
mod test_support;

pub use apply::{apply_config, resolve_presets};
pub use loader::load_config;

#[cfg(test)]
pub(crate) use loader::load_config_file;
