//! One-line rendering of patient records.

use std::fmt;

use hospital_records_core::{Layout, Patient};

/// Displays a patient as `ID: 1 | Name: Alice | ...` for a layout.
pub struct PatientLine<'a> {
    patient: &'a Patient,
    layout: Layout,
}

impl<'a> PatientLine<'a> {
    pub fn new(patient: &'a Patient, layout: Layout) -> Self {
        Self { patient, layout }
    }
}

impl fmt::Display for PatientLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.patient;
        write!(
            f,
            "ID: {} | Name: {} | Age: {} | Gender: {} | Disease: {} | Contact: {}",
            p.id, p.name, p.age, p.gender, p.disease, p.contact
        )?;
        if self.layout.has_assignment() {
            write!(f, " | Ward: {} | Doctor: {}", p.ward, p.doctor_assigned)?;
        }
        Ok(())
    }
}
