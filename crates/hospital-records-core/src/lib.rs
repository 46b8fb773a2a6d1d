//! Hospital Records Core Library
//!
//! Patient record model and a flat-file store that keeps every record in
//! memory and rewrites its backing file after each change.
//!
//! # Architecture
//!
//! ```text
//! Shell ──► PatientStore ──► patients.csv
//!              │
//!              └── Vec<Patient> (insertion order)
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (Patient, NewPatient, PatientUpdate, SearchField)
//! - [`store`]: Record store and the delimited line format

pub mod models;
pub mod store;

// Re-export commonly used types
pub use models::{NewPatient, Patient, PatientId, PatientUpdate, SearchField};
pub use store::{Layout, PatientStore, StoreConfig, StoreError, StoreResult};
