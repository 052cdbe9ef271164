//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
pub(crate) mod test_support;
#[cfg(test)]
mod tests;

pub use cli::RangeArgs;
pub use types::{KeyScript, KeyToken, OutputFormat};

pub(crate) use parsers::parse_clock_time;
