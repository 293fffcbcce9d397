use anyhow::Context;
use std::path::PathBuf;

pub const MANIFEST_PREFIX: &str = "appmanifest_";
pub const MANIFEST_EXTENSION: &str = ".acf";
pub const LIBRARY_FOLDERS_FILE: &str = "libraryfolders.vdf";

#[derive(Debug, Clone)]
pub struct Config {
    /// The primary `steamapps` directory; always library 0.
    pub primary_library: PathBuf,
}

impl Config {
    pub fn new() -> anyhow::Result<Self> {
        let home = dirs_next::home_dir().context("Failed to get home directory")?;
        Ok(Self::with_primary_library(
            home.join(".local/share/Steam/steamapps"),
        ))
    }

    pub fn with_primary_library(primary_library: PathBuf) -> Self {
        Self { primary_library }
    }

    pub fn library_folders_file(&self) -> PathBuf {
        self.primary_library.join(LIBRARY_FOLDERS_FILE)
    }
}

pub fn manifest_file_name(id: u32) -> String {
    format!("{}{}{}", MANIFEST_PREFIX, id, MANIFEST_EXTENSION)
}

pub fn is_manifest_file_name(name: &str) -> bool {
    name.starts_with(MANIFEST_PREFIX) && name.ends_with(MANIFEST_EXTENSION)
}
