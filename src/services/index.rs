use crate::models::config::is_manifest_file_name;
use crate::models::game::GameRecord;
use crate::utils::vdf::{self, KeyValues};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub type GameIndex = BTreeMap<u32, GameRecord>;

/// Scans every library for manifests. Unreadable libraries and manifests
/// are skipped; on an id collision the library scanned last wins.
pub fn build(libraries: &[PathBuf]) -> GameIndex {
    let mut games = GameIndex::new();

    for (library, root) in libraries.iter().enumerate() {
        for manifest in manifest_files(root) {
            let content = read_lossy(&manifest);
            let Some(record) = record_from(&vdf::parse_lossy(&content, &manifest), library) else {
                log::debug!("skipping {}: missing or invalid appid", manifest.display());
                continue;
            };
            if let Some(previous) = games.insert(record.id, record) {
                log::debug!(
                    "appid {} in library {} replaced by {}",
                    previous.id,
                    previous.library,
                    manifest.display()
                );
            }
        }
    }

    games
}

fn manifest_files(root: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("library unreadable: {}: {}", root.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| is_manifest_file_name(&entry.file_name().to_string_lossy()))
        .map(|entry| entry.path())
        .collect();
    files.sort();
    files
}

/// Reads a document as text, replacing invalid UTF-8. Unreadable files
/// yield an empty string.
pub(crate) fn read_lossy(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            log::debug!("unreadable: {}: {}", path.display(), e);
            String::new()
        }
    }
}

fn record_from(values: &KeyValues, library: usize) -> Option<GameRecord> {
    let field = |key: &str| values.get(key).cloned().unwrap_or_default();
    let id = values.get("appid")?.trim().parse::<u32>().ok()?;

    Some(GameRecord {
        id,
        name: field("name"),
        install_dir: field("installdir"),
        size_on_disk: field("SizeOnDisk"),
        library,
    })
}
