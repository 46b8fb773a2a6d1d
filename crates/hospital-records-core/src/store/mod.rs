//! Flat-file record store.
//!
//! The whole backing file is read into memory on open and rewritten in full
//! after every successful mutation.

pub mod format;
mod patients;

pub use format::{Layout, ParseError};

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, info};

use crate::models::{Patient, PatientId};

/// Default backing file for the basic layout.
pub const DEFAULT_PATH: &str = "patients.csv";

/// Default backing file for the extended layout.
pub const DEFAULT_EXTENDED_PATH: &str = "patients_extended.csv";

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to replace backing file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("No patient IDs left to assign")]
    IdSpaceExhausted,
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Where and how the store persists its records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Backing file path
    pub path: PathBuf,
    /// Record shape on disk
    pub layout: Layout,
    /// Write to a temporary sibling and rename over the backing file,
    /// keeping the existing file's permissions
    pub atomic_writes: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            layout: Layout::Basic,
            atomic_writes: true,
        }
    }
}

impl StoreConfig {
    /// Config for the given backing file, other settings default.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Extended layout backed by [`DEFAULT_EXTENDED_PATH`].
    pub fn extended() -> Self {
        Self::new(DEFAULT_EXTENDED_PATH).with_layout(Layout::Extended)
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_atomic_writes(mut self, atomic_writes: bool) -> Self {
        self.atomic_writes = atomic_writes;
        self
    }
}

/// In-memory patient list backed by a delimited text file.
#[derive(Debug)]
pub struct PatientStore {
    config: StoreConfig,
    patients: Vec<Patient>,
    /// `None` once the largest possible ID is in use.
    next_id: Option<PatientId>,
}

impl PatientStore {
    /// Open the store, loading the backing file.
    ///
    /// A load failure is logged and leaves the store empty.
    pub fn open(config: StoreConfig) -> Self {
        let mut store = Self::empty(config);
        if let Err(err) = store.load() {
            error!(error = %err, "error loading patient records");
        }
        store
    }

    /// Open the store, returning any load failure.
    pub fn try_open(config: StoreConfig) -> StoreResult<Self> {
        let mut store = Self::empty(config);
        store.load()?;
        Ok(store)
    }

    fn empty(config: StoreConfig) -> Self {
        Self {
            config,
            patients: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Replace the in-memory state with the backing file's contents.
    ///
    /// A missing file is an empty store. Malformed lines are skipped. On error
    /// the store is left empty. Returns the number of records loaded.
    pub fn load(&mut self) -> StoreResult<usize> {
        self.patients.clear();
        self.next_id = Some(1);

        let path = self.config.path.clone();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "backing file not found, starting empty");
                return Ok(0);
            }
            Err(err) => return Err(StoreError::io(&path, err)),
        };

        let layout = self.config.layout;
        let mut first = true;
        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if std::mem::take(&mut first) && format::is_header(line) {
                continue;
            }
            match layout.decode(line) {
                Ok(patient) => {
                    self.observe_id(patient.id);
                    self.patients.push(patient);
                }
                Err(err) => {
                    debug!(line = index + 1, error = %err, "skipping malformed record line");
                }
            }
        }

        info!(
            path = %path.display(),
            count = self.patients.len(),
            "loaded patient records"
        );
        Ok(self.patients.len())
    }

    /// Rewrite the backing file: header, then one line per record.
    pub fn save(&self) -> StoreResult<()> {
        let layout = self.config.layout;
        let mut contents = String::new();
        contents.push_str(layout.header());
        contents.push('\n');
        for patient in &self.patients {
            contents.push_str(&layout.encode(patient));
            contents.push('\n');
        }

        let path = &self.config.path;
        if self.config.atomic_writes {
            let dir = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let mut tmp =
                tempfile::NamedTempFile::new_in(dir).map_err(|e| StoreError::io(path, e))?;
            tmp.write_all(contents.as_bytes())
                .map_err(|e| StoreError::io(path, e))?;
            tmp.flush().map_err(|e| StoreError::io(path, e))?;
            // Temp files are created 0600; carry over the backing file's mode.
            if let Ok(metadata) = fs::metadata(path) {
                tmp.as_file()
                    .set_permissions(metadata.permissions())
                    .map_err(|e| StoreError::io(path, e))?;
            }
            tmp.persist(path)?;
        } else {
            fs::write(path, contents).map_err(|e| StoreError::io(path, e))?;
        }

        debug!(path = %path.display(), count = self.patients.len(), "saved patient records");
        Ok(())
    }

    /// Save after a mutation; failures are reported, not returned.
    fn persist(&self) {
        if let Err(err) = self.save() {
            error!(error = %err, "error saving patient records, changes kept in memory only");
        }
    }

    /// Advance the ID counter past a seen ID.
    fn observe_id(&mut self, id: PatientId) {
        if let Some(next) = self.next_id {
            if id >= next {
                self.next_id = id.checked_add(1);
            }
        }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn layout(&self) -> Layout {
        self.config.layout
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// ID the next add will assign, if any remain.
    pub fn next_id(&self) -> Option<PatientId> {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}
