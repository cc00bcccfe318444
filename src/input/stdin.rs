#![cfg(feature = "std")]

use std::io::Write;

use tokio::io::{self, AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::input::InputSource;

/// Reads commands from the terminal, printing a prompt before each line.
pub struct StdinInput {
    lines: Lines<BufReader<Stdin>>,
    prompt: &'static str,
}

impl StdinInput {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(io::stdin()).lines(),
            prompt: "> ",
        }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl InputSource for StdinInput {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        print!("{}", self.prompt);
        std::io::stdout().flush()?;
        Ok(self.lines.next_line().await?)
    }
}
