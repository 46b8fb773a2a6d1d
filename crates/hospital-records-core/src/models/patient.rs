//! Patient models.

/// Numeric patient identifier, assigned by the store.
///
/// Signed: hand-edited files may carry zero or negative IDs, which load as-is.
pub type PatientId = i32;

/// A patient record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    /// Store-assigned ID, unique among live records
    pub id: PatientId,
    /// Patient name
    pub name: String,
    /// Age in years (not range checked)
    pub age: i32,
    /// Gender, free text
    pub gender: String,
    /// Presenting disease or condition
    pub disease: String,
    /// Phone number or other contact detail
    pub contact: String,
    /// Ward (extended layout only, empty otherwise)
    pub ward: String,
    /// Doctor assigned (extended layout only, empty otherwise)
    pub doctor_assigned: String,
}

impl Patient {
    /// Build a record from new-patient fields and an assigned ID.
    pub fn from_new(id: PatientId, fields: NewPatient) -> Self {
        Self {
            id,
            name: fields.name,
            age: fields.age,
            gender: fields.gender,
            disease: fields.disease,
            contact: fields.contact,
            ward: fields.ward,
            doctor_assigned: fields.doctor_assigned,
        }
    }

    /// Text of the given searchable field.
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Name => &self.name,
            SearchField::Gender => &self.gender,
            SearchField::Disease => &self.disease,
            SearchField::Contact => &self.contact,
            SearchField::Ward => &self.ward,
            SearchField::Doctor => &self.doctor_assigned,
        }
    }

    /// Case-insensitive substring match against one field.
    pub fn matches(&self, query: &str, field: SearchField) -> bool {
        self.field(field)
            .to_lowercase()
            .contains(&query.to_lowercase())
    }

    /// Apply the supplied fields of an update. Returns true if anything was supplied.
    pub fn apply(&mut self, update: PatientUpdate) -> bool {
        let changed = !update.is_empty();
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(disease) = update.disease {
            self.disease = disease;
        }
        if let Some(contact) = update.contact {
            self.contact = contact;
        }
        if let Some(ward) = update.ward {
            self.ward = ward;
        }
        if let Some(doctor) = update.doctor_assigned {
            self.doctor_assigned = doctor;
        }
        changed
    }
}

/// Fields for a patient that has not been assigned an ID yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub disease: String,
    pub contact: String,
    pub ward: String,
    pub doctor_assigned: String,
}

impl NewPatient {
    /// Create the basic-layout fields; ward and doctor stay empty.
    pub fn new(
        name: impl Into<String>,
        age: i32,
        gender: impl Into<String>,
        disease: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            gender: gender.into(),
            disease: disease.into(),
            contact: contact.into(),
            ..Default::default()
        }
    }

    /// Set the clinical assignment used by the extended layout.
    pub fn with_assignment(mut self, ward: impl Into<String>, doctor: impl Into<String>) -> Self {
        self.ward = ward.into();
        self.doctor_assigned = doctor.into();
        self
    }
}

/// Partial update: `Some` replaces the field, `None` keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub disease: Option<String>,
    pub contact: Option<String>,
    pub ward: Option<String>,
    pub doctor_assigned: Option<String>,
}

impl PatientUpdate {
    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.disease.is_none()
            && self.contact.is_none()
            && self.ward.is_none()
            && self.doctor_assigned.is_none()
    }
}

/// Text fields that can be searched by substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Name,
    Gender,
    Disease,
    Contact,
    Ward,
    Doctor,
}

impl SearchField {
    /// Fields present in the basic layout.
    pub const BASIC: [SearchField; 4] = [
        SearchField::Name,
        SearchField::Gender,
        SearchField::Disease,
        SearchField::Contact,
    ];

    /// All fields, extended layout included.
    pub const ALL: [SearchField; 6] = [
        SearchField::Name,
        SearchField::Gender,
        SearchField::Disease,
        SearchField::Contact,
        SearchField::Ward,
        SearchField::Doctor,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            SearchField::Name => "Name",
            SearchField::Gender => "Gender",
            SearchField::Disease => "Disease",
            SearchField::Contact => "Contact",
            SearchField::Ward => "Ward",
            SearchField::Doctor => "Doctor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Patient {
        Patient::from_new(1, NewPatient::new("Alice", 30, "F", "Influenza", "555-0100"))
    }

    #[test]
    fn test_from_new() {
        let patient = alice();
        assert_eq!(patient.id, 1);
        assert_eq!(patient.name, "Alice");
        assert_eq!(patient.age, 30);
        assert!(patient.ward.is_empty());
        assert!(patient.doctor_assigned.is_empty());
    }

    #[test]
    fn test_matches_case_insensitive() {
        let patient = alice();
        assert!(patient.matches("flu", SearchField::Disease));
        assert!(patient.matches("ALI", SearchField::Name));
        assert!(!patient.matches("flu", SearchField::Name));
        // Empty query matches everything
        assert!(patient.matches("", SearchField::Contact));
    }

    #[test]
    fn test_apply_only_supplied_fields() {
        let mut patient = alice();
        let changed = patient.apply(PatientUpdate {
            name: Some("Alicia".into()),
            ..Default::default()
        });

        assert!(changed);
        assert_eq!(patient.name, "Alicia");
        assert_eq!(patient.age, 30);
        assert_eq!(patient.disease, "Influenza");
    }

    #[test]
    fn test_apply_empty_update() {
        let mut patient = alice();
        let before = patient.clone();
        assert!(!patient.apply(PatientUpdate::default()));
        assert_eq!(patient, before);
    }

    #[test]
    fn test_with_assignment() {
        let fields = NewPatient::new("Bob", 40, "M", "Cold", "555-0200")
            .with_assignment("B2", "Dr. Grey");
        let patient = Patient::from_new(7, fields);
        assert_eq!(patient.field(SearchField::Ward), "B2");
        assert_eq!(patient.field(SearchField::Doctor), "Dr. Grey");
    }
}
