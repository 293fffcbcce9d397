use crate::models::config::manifest_file_name;
use std::fmt::{self, Display};
use std::path::{Component, Path, PathBuf};

const GB: u64 = 1_000_000_000;
const MB: u64 = 1_000_000;

/// One installed game, as described by its `appmanifest_<id>.acf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub id: u32,
    pub name: String,
    /// Directory name under `<library>/common`.
    pub install_dir: String,
    /// Raw `SizeOnDisk` text; may be empty or non-numeric.
    pub size_on_disk: String,
    /// Position of the owning library in the library list.
    pub library: usize,
}

impl GameRecord {
    /// `None` when `library` is not an index into `libraries`.
    pub fn full_path(&self, libraries: &[PathBuf]) -> Option<PathBuf> {
        let root = libraries.get(self.library)?;
        Some(root.join("common").join(&self.install_dir))
    }

    pub fn manifest_path(&self, libraries: &[PathBuf]) -> Option<PathBuf> {
        let root = libraries.get(self.library)?;
        Some(root.join(manifest_file_name(self.id)))
    }

    /// Whether `install_dir` names exactly one directory below `common/`.
    pub fn has_safe_install_dir(&self) -> bool {
        let mut components = Path::new(&self.install_dir).components();
        matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        )
    }

    pub fn formatted_size(&self) -> String {
        match self.size_on_disk.trim().parse::<u64>() {
            Ok(bytes) if bytes >= GB => format!("{} gb", bytes / GB),
            Ok(bytes) => format!("{} mb", bytes / MB),
            Err(_) => "0 b".to_string(),
        }
    }
}

impl Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
