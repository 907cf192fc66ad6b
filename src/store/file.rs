use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::warn;

use super::{StoreError, UsernameStore, USER_KEY};

/// TOML-file backed store.
///
/// Writes go to a temp file that is fsynced and renamed over the state file,
/// under an exclusive lock on a sibling `.lock` file. Keys other than `user`
/// are kept as they are.
#[derive(Debug, Clone)]
pub struct FileUsernameStore {
    path: PathBuf,
}

impl FileUsernameStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<toml::Table, StoreError> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        toml::from_str(&content).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn lock_path(&self) -> PathBuf {
        sibling(&self.path, "lock")
    }

    fn temp_path(&self) -> PathBuf {
        sibling(&self.path, "tmp")
    }

    fn write_table(&self, table: &toml::Table) -> Result<(), StoreError> {
        let content = toml::to_string(table)?;
        let temp_path = self.temp_path();

        let mut file = File::create(&temp_path).map_err(|e| self.io_error(e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| self.io_error(e))?;
        file.sync_all().map_err(|e| self.io_error(e))?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(|e| self.io_error(e))
    }
}

impl UsernameStore for FileUsernameStore {
    fn get(&self) -> String {
        match self.read_table() {
            Ok(table) => table
                .get(USER_KEY)
                .and_then(|value| value.as_str())
                .map(str::to_string)
                .unwrap_or_default(),
            Err(err) => {
                warn!(error = %err, "Ignoring unreadable state file");
                String::new()
            }
        }
    }

    fn set(&mut self, user: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())
            .map_err(|e| self.io_error(e))?;
        FileExt::lock_exclusive(&lock).map_err(|e| self.io_error(e))?;

        let mut table = self.read_table().unwrap_or_else(|err| {
            warn!(error = %err, "Replacing unreadable state file");
            toml::Table::new()
        });
        table.insert(USER_KEY.to_string(), toml::Value::String(user.to_string()));
        let result = self.write_table(&table);

        if let Err(err) = FileExt::unlock(&lock) {
            warn!(
                error = %err,
                path = %self.lock_path().display(),
                "Failed to unlock state file"
            );
        }
        result
    }
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}
