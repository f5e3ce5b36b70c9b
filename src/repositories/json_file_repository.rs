//! Address book storage backed by a JSON file.

use super::traits::AddressBookRepository;
use crate::error::StorageResult;
use crate::models::AddressBook;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Stores the address book as a single JSON document.
///
/// Saves go through a temporary file in the same directory that is then
/// renamed over the target, so an interrupted save never truncates the book.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where [`set_aside`](Self::set_aside) moves an unreadable file.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".bak");
        PathBuf::from(name)
    }

    /// Rename the current file to [`backup_path`](Self::backup_path) so the
    /// next save cannot overwrite a book that failed to load.
    pub fn set_aside(&self) -> StorageResult<PathBuf> {
        let backup = self.backup_path();
        fs::rename(&self.path, &backup)?;
        warn!("Moved unreadable address book {:?} to {:?}", self.path, backup);
        Ok(backup)
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No address book at {:?}, starting empty", self.path);
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book: AddressBook = serde_json::from_reader(BufReader::new(file))?;
        debug!("Loaded {} contacts from {:?}", book.len(), self.path);
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let tmp_file = NamedTempFile::new_in(self.directory())?;
        {
            let mut writer = BufWriter::new(tmp_file.as_file());
            serde_json::to_writer_pretty(&mut writer, book)?;
            writer.flush()?;
        }
        tmp_file.persist(&self.path)?;

        debug!("Saved {} contacts to {:?}", book.len(), self.path);
        Ok(())
    }
}
