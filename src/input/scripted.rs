#![cfg(feature = "std")]

use std::collections::VecDeque;
use std::path::Path;

use crate::input::InputSource;

/// Replays a fixed list of commands, one per line.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a script file. Blank lines and lines starting with `#` are skipped.
    pub async fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let text = tokio::fs::read_to_string(path.as_ref()).await?;
        Ok(Self::new(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .map(str::to_owned),
        ))
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

#[async_trait::async_trait]
impl InputSource for ScriptedInput {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.queue.pop_front())
    }
}
