use super::{filter_records, insert_record, remove_record, update_record, DataStore, Filters};
use crate::error::Result;
use crate::model::{Fields, Record};
use log::debug;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// A structured-text notation a [`FileStore`] persists records in.
///
/// The store logic is identical for every notation; this trait is the only
/// axis on which the registered backends differ.
pub trait FileFormat {
    /// Stable name used by the backend registry (e.g. `"json"`).
    const NAME: &'static str;

    /// Default file name, placed under the user's home directory.
    const FILE_NAME: &'static str;

    fn serialize(records: &[Record]) -> Result<String>;

    fn deserialize(text: &str) -> Result<Vec<Record>>;
}

/// File-backed record storage.
///
/// The whole record sequence lives in memory and is backed by exactly one
/// file. Construction leaves the backing file existing and valid: an existing
/// file is parsed in full, a missing one is created as an empty sequence.
/// Every mutation rewrites the entire file; there is no append path.
pub struct FileStore<F: FileFormat> {
    path: PathBuf,
    records: Vec<Record>,
    _format: PhantomData<F>,
}

impl<F: FileFormat> FileStore<F> {
    /// Open the store at `path`, or at the backend's default path when `None`.
    pub fn open(path: Option<PathBuf>) -> Result<Self> {
        let path = path.unwrap_or_else(default_path::<F>);
        let mut store = Self {
            path,
            records: Vec::new(),
            _format: PhantomData,
        };

        if store.path.exists() {
            store.reload()?;
        } else {
            store.write()?;
        }
        Ok(store)
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-parse the backing file, discarding any unsaved in-memory state.
    ///
    /// This is the only way to pick up external changes to the file; it is
    /// never invoked implicitly.
    pub fn reload(&mut self) -> Result<()> {
        debug!("Reloading data store: {}", self.path.display());
        let text = fs::read_to_string(&self.path)?;
        self.records = F::deserialize(&text)?;
        Ok(())
    }

    fn write(&self) -> Result<()> {
        debug!("Writing data store: {}", self.path.display());
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, F::serialize(&self.records)?)?;
        Ok(())
    }
}

fn default_path<F: FileFormat>() -> PathBuf {
    match directories::UserDirs::new() {
        Some(dirs) => dirs.home_dir().join(F::FILE_NAME),
        None => PathBuf::from(F::FILE_NAME),
    }
}

impl<F: FileFormat> DataStore for FileStore<F> {
    fn read(&self, filters: &Filters) -> Result<Vec<Record>> {
        filter_records(&self.records, filters)
    }

    fn create(&mut self, fields: &Fields) -> Result<()> {
        insert_record(&mut self.records, fields)?;
        self.write()
    }

    fn update(&mut self, name: &str, fields: &Fields) -> Result<()> {
        update_record(&mut self.records, name, fields)?;
        self.write()
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        remove_record(&mut self.records, name)?;
        self.write()
    }
}
