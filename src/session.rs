#![cfg(feature = "std")]

//! Interactive session: pulls commands from an [`InputSource`], applies
//! them to a [`Sheet`] and redraws after every change.

use std::io::{self, Stdout, Write};

use crate::{
    command::{Command, CommandError, HELP},
    input::InputSource,
    sheet::{Sheet, SheetState},
    ui::{format_screen, RenderOptions},
};

/// A line that was not valid UTF-8. The reader has already consumed it, so
/// the session can carry on with the next one.
fn is_unreadable_line(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::InvalidData)
}

/// What the session should do after a command has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Redraw,
    Print(String),
    Quit,
}

pub struct Session<W: Write = Stdout> {
    sheet: Sheet,
    input: Box<dyn InputSource>,
    out: W,
    render: RenderOptions,
}

impl Session<Stdout> {
    pub fn new(sheet: Sheet, input: Box<dyn InputSource>, render: RenderOptions) -> Self {
        Self::with_output(sheet, input, render, io::stdout())
    }
}

impl<W: Write> Session<W> {
    pub fn with_output(
        sheet: Sheet,
        input: Box<dyn InputSource>,
        render: RenderOptions,
        out: W,
    ) -> Self {
        Self {
            sheet,
            input,
            out,
            render,
        }
    }

    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Apply one command to the sheet. Errors leave the sheet untouched.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, CommandError> {
        match command {
            Command::Select(variant) => {
                log::info!("board selected: {}", variant);
                self.sheet.select_variant(variant);
                Ok(Outcome::Redraw)
            }
            Command::Change => {
                self.sheet.clear_variant();
                Ok(Outcome::Redraw)
            }
            Command::Mark(target) => {
                let item = target.resolve(&self.sheet)?;
                self.sheet.cycle_mark(item);
                Ok(Outcome::Redraw)
            }
            Command::Name(target) => {
                let item = target.resolve(&self.sheet)?;
                self.sheet.toggle_highlight(item)?;
                Ok(Outcome::Redraw)
            }
            Command::Show => Ok(Outcome::Redraw),
            Command::Json => {
                let json = serde_json::to_string_pretty(&self.sheet.render())
                    .map_err(|e| CommandError::Json(e.to_string()))?;
                Ok(Outcome::Print(json))
            }
            Command::Help => Ok(Outcome::Print(HELP.to_string())),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    fn redraw(&mut self) -> io::Result<()> {
        let text = format_screen(&self.sheet.render(), self.render);
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Run until the input is exhausted or a `quit` command arrives, then
    /// return the final state.
    pub async fn run(&mut self) -> anyhow::Result<SheetState> {
        self.redraw()?;
        loop {
            let line = match self.input.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) if is_unreadable_line(&e) => {
                    log::debug!("skipping unreadable input: {}", e);
                    writeln!(self.out, "Error: {}", e)?;
                    continue;
                }
                Err(e) => return Err(e),
            };
            let outcome = line.parse::<Command>().and_then(|cmd| self.apply(cmd));
            match outcome {
                Ok(Outcome::Redraw) => self.redraw()?,
                Ok(Outcome::Print(text)) => writeln!(self.out, "{}", text)?,
                Ok(Outcome::Quit) => break,
                Err(CommandError::Empty) => {}
                Err(e) => {
                    log::debug!("rejected '{}': {:?}", line.trim(), e);
                    writeln!(self.out, "Error: {}", e)?;
                }
            }
        }
        log::info!(
            "session ended on {} with {} marked cells",
            self.sheet.variant(),
            self.sheet.marked_count()
        );
        Ok(self.sheet.state())
    }
}
