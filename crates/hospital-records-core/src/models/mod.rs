//! Domain models for the hospital record store.

mod patient;

pub use patient::*;
