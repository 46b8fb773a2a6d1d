//! Menu-driven read-evaluate-print loop.

use std::io::{BufRead, Write};

use hospital_records_core::{
    Layout, NewPatient, Patient, PatientId, PatientStore, PatientUpdate, SearchField,
};
use tracing::debug;

use crate::menu::{MenuChoice, SearchBy, SearchMenu, MAIN_MENU};
use crate::prompt::Prompter;
use crate::render::PatientLine;
use crate::{ShellError, ShellResult};

/// Interactive shell over a record store.
pub struct Shell<'s, R, W> {
    store: &'s mut PatientStore,
    io: Prompter<R, W>,
    search_menu: SearchMenu,
}

impl<'s, R: BufRead, W: Write> Shell<'s, R, W> {
    pub fn new(store: &'s mut PatientStore, input: R, output: W) -> Self {
        let search_menu = SearchMenu::for_layout(store.layout());
        Self {
            store,
            io: Prompter::new(input, output),
            search_menu,
        }
    }

    /// Run until Exit is chosen or input ends.
    pub fn run(&mut self) -> ShellResult<()> {
        match self.run_loop() {
            Err(ShellError::InputClosed) => {
                debug!("input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn run_loop(&mut self) -> ShellResult<()> {
        loop {
            self.io.say(MAIN_MENU)?;
            let reply = self.io.ask("Enter your choice: ")?;

            match MenuChoice::parse(&reply) {
                Some(MenuChoice::Add) => self.add()?,
                Some(MenuChoice::Search) => self.search()?,
                Some(MenuChoice::Update) => self.update()?,
                Some(MenuChoice::Delete) => self.delete()?,
                Some(MenuChoice::ViewAll) => self.view_all()?,
                Some(MenuChoice::Exit) => {
                    self.io.say("Goodbye!")?;
                    return Ok(());
                }
                None => self.io.say("Invalid choice. Try again.")?,
            }
            self.io.blank()?;
        }
    }

    fn layout(&self) -> Layout {
        self.store.layout()
    }

    fn line<'p>(&self, patient: &'p Patient) -> PatientLine<'p> {
        PatientLine::new(patient, self.layout())
    }

    fn add(&mut self) -> ShellResult<()> {
        self.io.say("--- Add Patient ---")?;
        let name = self.io.ask("Name: ")?;
        let age = self.io.ask_int("Age: ")?;
        let gender = self.io.ask("Gender: ")?;
        let disease = self.io.ask("Disease: ")?;
        let contact = self.io.ask("Contact: ")?;

        let mut fields = NewPatient::new(name, age, gender, disease, contact);
        if self.layout().has_assignment() {
            let ward = self.io.ask("Ward: ")?;
            let doctor = self.io.ask("Doctor assigned: ")?;
            fields = fields.with_assignment(ward, doctor);
        }

        match self.store.add(fields) {
            Ok(patient) => {
                let line = self.line(&patient).to_string();
                self.io.say(format!("Patient added: {line}"))
            }
            Err(err) => self.io.say(format!("Could not add patient: {err}")),
        }
    }

    fn search(&mut self) -> ShellResult<()> {
        self.io.say("--- Search Patient ---")?;
        self.io.say(self.search_menu.options_line())?;
        let prompt = self.search_menu.prompt();
        let reply = self.io.ask(&prompt)?;

        match self.search_menu.select(&reply) {
            SearchBy::Id => {
                let id = self.io.ask_int("Enter ID: ")?;
                match self.store.find_by_id(id) {
                    Some(patient) => {
                        let line = self.line(patient).to_string();
                        self.io.say(line)
                    }
                    None => self.io.say(format!("No patient with ID {id}")),
                }
            }
            SearchBy::Field(field) => self.search_field(field),
        }
    }

    fn search_field(&mut self, field: SearchField) -> ShellResult<()> {
        let label = field.label().to_lowercase();
        let query = self.io.ask(&format!("Enter {label} or part of {label}: "))?;

        let results = self.store.find_by_field(&query, field);
        if results.is_empty() {
            return self.io.say("No matches.");
        }
        for patient in &results {
            let line = self.line(patient).to_string();
            self.io.say(line)?;
        }
        Ok(())
    }

    /// Ask for an ID and print the record, or report it missing.
    fn lookup(&mut self, prompt: &str) -> ShellResult<Option<Patient>> {
        let id: PatientId = self.io.ask_int(prompt)?;
        let found = self.store.find_by_id(id).cloned();
        if found.is_none() {
            self.io.say(format!("No patient with ID {id}"))?;
        }
        Ok(found)
    }

    fn update(&mut self) -> ShellResult<()> {
        self.io.say("--- Update Patient ---")?;
        let Some(current) = self.lookup("Enter patient ID to update: ")? else {
            return Ok(());
        };
        let line = self.line(&current).to_string();
        self.io.say(format!("Current: {line}"))?;
        self.io.say("Press Enter without typing to keep existing value.")?;

        let mut update = PatientUpdate {
            name: self.io.ask_optional(&format!("New name ({}): ", current.name))?,
            age: self.ask_age(current.age)?,
            gender: self
                .io
                .ask_optional(&format!("New gender ({}): ", current.gender))?,
            disease: self
                .io
                .ask_optional(&format!("New disease ({}): ", current.disease))?,
            contact: self
                .io
                .ask_optional(&format!("New contact ({}): ", current.contact))?,
            ..Default::default()
        };
        if self.layout().has_assignment() {
            update.ward = self
                .io
                .ask_optional(&format!("New ward ({}): ", current.ward))?;
            update.doctor_assigned = self
                .io
                .ask_optional(&format!("New doctor ({}): ", current.doctor_assigned))?;
        }

        if self.store.update(current.id, update) {
            self.io.say("Patient updated.")
        } else {
            self.io.say("Update failed.")
        }
    }

    /// Optional age: blank or non-numeric keeps the current value.
    fn ask_age(&mut self, current: i32) -> ShellResult<Option<i32>> {
        let Some(reply) = self.io.ask_optional(&format!("New age ({current}): "))? else {
            return Ok(None);
        };
        match reply.parse() {
            Ok(age) => Ok(Some(age)),
            Err(_) => {
                self.io.say("Invalid age, keeping current value.")?;
                Ok(None)
            }
        }
    }

    fn delete(&mut self) -> ShellResult<()> {
        self.io.say("--- Delete Patient ---")?;
        let Some(found) = self.lookup("Enter patient ID to delete: ")? else {
            return Ok(());
        };
        let line = self.line(&found).to_string();
        self.io.say(format!("Found: {line}"))?;

        let confirm = self.io.ask("Are you sure? (y/N): ")?.to_lowercase();
        if confirm != "y" && confirm != "yes" {
            return self.io.say("Delete cancelled.");
        }

        if self.store.delete(found.id) {
            self.io.say("Deleted.")
        } else {
            self.io.say("Delete failed.")
        }
    }

    fn view_all(&mut self) -> ShellResult<()> {
        self.io.say("--- All Patients ---")?;
        let all = self.store.list_all();
        if all.is_empty() {
            return self.io.say("No records.");
        }
        for patient in &all {
            let line = self.line(patient).to_string();
            self.io.say(line)?;
        }
        Ok(())
    }
}
