use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::editor::EditorKey;

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One step of a scripted editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyToken {
    Key(EditorKey),
    /// Click that leaves the selection start at this offset.
    Click(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyScript(Vec<KeyToken>);

impl KeyScript {
    #[must_use]
    pub const fn new(tokens: Vec<KeyToken>) -> Self {
        Self(tokens)
    }

    #[must_use]
    pub fn tokens(&self) -> &[KeyToken] {
        &self.0
    }
}
