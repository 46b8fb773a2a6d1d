//! Patient record operations.

use tracing::{debug, info};

use super::{PatientStore, StoreError, StoreResult};
use crate::models::{NewPatient, Patient, PatientId, PatientUpdate, SearchField};

impl PatientStore {
    /// Add a new patient with the next ID and persist.
    pub fn add(&mut self, fields: NewPatient) -> StoreResult<Patient> {
        let id = self.next_id.ok_or(StoreError::IdSpaceExhausted)?;
        let patient = Patient::from_new(id, fields);

        self.patients.push(patient.clone());
        self.next_id = id.checked_add(1);
        self.persist();

        info!(id, "added patient");
        Ok(patient)
    }

    /// Get a patient by ID.
    pub fn find_by_id(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// Search one field by case-insensitive substring, in store order.
    pub fn find_by_field(&self, query: &str, field: SearchField) -> Vec<Patient> {
        let results: Vec<Patient> = self
            .patients
            .iter()
            .filter(|p| p.matches(query, field))
            .cloned()
            .collect();

        debug!(field = field.label(), matches = results.len(), "searched patients");
        results
    }

    /// Search patients by name (substring match).
    pub fn find_by_name(&self, query: &str) -> Vec<Patient> {
        self.find_by_field(query, SearchField::Name)
    }

    /// Apply the supplied fields to an existing patient and persist.
    ///
    /// Returns false, without touching the file, if the ID is unknown.
    pub fn update(&mut self, id: PatientId, update: PatientUpdate) -> bool {
        let Some(patient) = self.patients.iter_mut().find(|p| p.id == id) else {
            debug!(id, "update of unknown patient");
            return false;
        };

        let changed = patient.apply(update);
        self.persist();

        info!(id, changed, "updated patient");
        true
    }

    /// Delete a patient. Persists only if a record was removed.
    pub fn delete(&mut self, id: PatientId) -> bool {
        let Some(index) = self.patients.iter().position(|p| p.id == id) else {
            debug!(id, "delete of unknown patient");
            return false;
        };

        self.patients.remove(index);
        self.persist();

        info!(id, "deleted patient");
        true
    }

    /// Snapshot of all patients in store order.
    pub fn list_all(&self) -> Vec<Patient> {
        self.patients.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreConfig;
    use std::fs;
    use tempfile::TempDir;

    fn setup_store(dir: &TempDir) -> PatientStore {
        PatientStore::open(StoreConfig::new(dir.path().join("patients.csv")))
    }

    #[test]
    fn test_add_and_find() {
        let dir = TempDir::new().unwrap();
        let mut store = setup_store(&dir);

        let patient = store
            .add(NewPatient::new("Alice", 30, "F", "Flu", "555-0100"))
            .unwrap();
        assert_eq!(patient.id, 1);

        let retrieved = store.find_by_id(1).unwrap();
        assert_eq!(retrieved.name, "Alice");
        assert_eq!(retrieved.age, 30);
        assert!(store.find_by_id(2).is_none());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let dir = TempDir::new().unwrap();
        let mut store = setup_store(&dir);

        store.add(NewPatient::new("Alice", 30, "F", "Flu", "555")).unwrap();
        store.add(NewPatient::new("Ann", 31, "F", "Flu", "556")).unwrap();
        assert!(store.delete(2));

        let bob = store.add(NewPatient::new("Bob", 40, "M", "Cold", "557")).unwrap();
        assert_eq!(bob.id, 3);
    }

    #[test]
    fn test_search_by_field() {
        let dir = TempDir::new().unwrap();
        let mut store = setup_store(&dir);

        store.add(NewPatient::new("Max", 3, "M", "Influenza", "555")).unwrap();
        store.add(NewPatient::new("Maxine", 4, "F", "Cold", "556")).unwrap();
        store.add(NewPatient::new("Luna", 5, "F", "Avian FLU", "557")).unwrap();

        let by_disease = store.find_by_field("flu", SearchField::Disease);
        let names: Vec<_> = by_disease.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Max", "Luna"]);

        let by_name = store.find_by_name("max");
        assert_eq!(by_name.len(), 2);

        assert!(store.find_by_field("nobody", SearchField::Name).is_empty());
        assert_eq!(store.find_by_field("", SearchField::Contact).len(), 3);
    }

    #[test]
    fn test_update_patient() {
        let dir = TempDir::new().unwrap();
        let mut store = setup_store(&dir);
        store.add(NewPatient::new("Max", 3, "M", "Flu", "555")).unwrap();

        let updated = store.update(
            1,
            PatientUpdate {
                age: Some(4),
                contact: Some("999".into()),
                ..Default::default()
            },
        );
        assert!(updated);

        let retrieved = store.find_by_id(1).unwrap();
        assert_eq!(retrieved.name, "Max");
        assert_eq!(retrieved.age, 4);
        assert_eq!(retrieved.contact, "999");
    }

    #[test]
    fn test_update_with_no_fields_keeps_record() {
        let dir = TempDir::new().unwrap();
        let mut store = setup_store(&dir);
        let before = store.add(NewPatient::new("Max", 3, "M", "Flu", "555")).unwrap();

        // Known ID with nothing supplied still counts as a successful update
        assert!(store.update(1, PatientUpdate::default()));
        assert_eq!(store.find_by_id(1), Some(&before));
    }

    #[test]
    fn test_update_unknown_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let mut store = setup_store(&dir);
        store.add(NewPatient::new("Max", 3, "M", "Flu", "555")).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        let updated = store.update(
            42,
            PatientUpdate {
                name: Some("Ghost".into()),
                ..Default::default()
            },
        );
        assert!(!updated);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_delete_unknown_does_not_create_file() {
        let dir = TempDir::new().unwrap();
        let mut store = setup_store(&dir);

        assert!(!store.delete(1));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_list_all_is_snapshot() {
        let dir = TempDir::new().unwrap();
        let mut store = setup_store(&dir);
        store.add(NewPatient::new("Max", 3, "M", "Flu", "555")).unwrap();

        let snapshot = store.list_all();
        store.add(NewPatient::new("Luna", 5, "F", "Cold", "556")).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.list_all().len(), 2);
    }
}
