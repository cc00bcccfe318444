#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod common;
mod config;
mod mark;
mod sheet;
pub mod view;
#[cfg(feature = "std")]
pub mod command;
#[cfg(feature = "std")]
pub mod input;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod prelude;
#[cfg(feature = "std")]
mod session;
#[cfg(feature = "std")]
mod ui;

pub use common::*;
pub use config::*;
pub use mark::*;
pub use sheet::*;
pub use view::{BoardView, Row, Screen, Section};
#[cfg(feature = "std")]
pub use command::{Command, CommandError, Target};
#[cfg(feature = "std")]
pub use input::{scripted::ScriptedInput, stdin::StdinInput, InputSource};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use session::*;
#[cfg(feature = "std")]
pub use ui::*;
