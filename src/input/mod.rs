//! Sources of typed commands for a [`Session`](crate::Session).

/// Line-oriented input. `Ok(None)` means the input is exhausted.
#[async_trait::async_trait]
pub trait InputSource: Send {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>>;
}

#[cfg(feature = "std")]
pub mod scripted;
#[cfg(feature = "std")]
pub mod stdin;
