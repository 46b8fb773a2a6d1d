//! Hospital Records Shell
//!
//! Console front end for [`hospital_records_core::PatientStore`]: a numbered
//! menu, one prompt per field, and one-line record output.
//!
//! # Modules
//!
//! - [`shell`]: The menu loop and per-operation handlers
//! - [`prompt`]: Line prompts, integer re-prompting, optional values
//! - [`menu`]: Main menu and search sub-menu selections
//! - [`render`]: Record formatting
//! - [`logging`]: Tracing subscriber setup for the binaries

pub mod logging;
pub mod menu;
pub mod prompt;
pub mod render;
pub mod shell;

pub use shell::Shell;

use std::io;

use hospital_records_core::{PatientStore, StoreConfig};
use thiserror::Error;

/// Shell errors.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed")]
    InputClosed,
}

pub type ShellResult<T> = Result<T, ShellError>;

/// Open the store for `config` and run the shell on stdin/stdout.
pub fn run(config: StoreConfig) -> ShellResult<()> {
    let mut store = PatientStore::open(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut store, stdin.lock(), stdout.lock()).run()
}
