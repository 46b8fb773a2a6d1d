//! Delimited line format for the backing file.
//!
//! One record per line, fields joined by [`DELIMITER`] in a fixed order.
//! Values are written verbatim: a value containing the delimiter produces a
//! line with too many columns, which is discarded on the next load.

use thiserror::Error;

use crate::models::{Patient, PatientId};

/// Field delimiter.
pub const DELIMITER: char = ',';

/// Header for the basic layout.
pub const BASIC_HEADER: &str = "id,name,age,gender,disease,contact";

/// Header for the extended layout.
pub const EXTENDED_HEADER: &str = "id,name,age,gender,disease,contact,ward,doctor";

/// Record shape persisted in the backing file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// id, name, age, gender, disease, contact
    #[default]
    Basic,
    /// Basic columns followed by ward and doctor
    Extended,
}

impl Layout {
    /// Header line written at the top of the file.
    pub fn header(self) -> &'static str {
        match self {
            Layout::Basic => BASIC_HEADER,
            Layout::Extended => EXTENDED_HEADER,
        }
    }

    /// Number of columns a record line must have.
    pub fn column_count(self) -> usize {
        match self {
            Layout::Basic => 6,
            Layout::Extended => 8,
        }
    }

    /// Whether ward and doctor are part of this layout.
    pub fn has_assignment(self) -> bool {
        matches!(self, Layout::Extended)
    }

    /// Encode a record as one line (no trailing newline).
    pub fn encode(self, patient: &Patient) -> String {
        let mut line = format!(
            "{},{},{},{},{},{}",
            patient.id,
            patient.name,
            patient.age,
            patient.gender,
            patient.disease,
            patient.contact
        );
        if self.has_assignment() {
            line.push(DELIMITER);
            line.push_str(&patient.ward);
            line.push(DELIMITER);
            line.push_str(&patient.doctor_assigned);
        }
        line
    }

    /// Decode one non-blank, already trimmed line.
    pub fn decode(self, line: &str) -> Result<Patient, ParseError> {
        let parts: Vec<&str> = line.split(DELIMITER).collect();
        if parts.len() != self.column_count() {
            return Err(ParseError::FieldCount {
                expected: self.column_count(),
                found: parts.len(),
            });
        }

        let id: PatientId = parse_int("id", parts[0])?;
        let age: i32 = parse_int("age", parts[2])?;

        let (ward, doctor_assigned) = if self.has_assignment() {
            (parts[6].to_string(), parts[7].to_string())
        } else {
            (String::new(), String::new())
        };

        Ok(Patient {
            id,
            name: parts[1].to_string(),
            age,
            gender: parts[3].to_string(),
            disease: parts[4].to_string(),
            contact: parts[5].to_string(),
            ward,
            doctor_assigned,
        })
    }
}

/// Whether a line is a header: starts with `id,`, ignoring case.
pub fn is_header(line: &str) -> bool {
    line.get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("id,"))
}

fn parse_int<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

/// Reasons a persisted line is rejected.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid integer for {field}: {value:?}")]
    InvalidInteger { field: &'static str, value: String },
}
