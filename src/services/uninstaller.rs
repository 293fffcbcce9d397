use crate::models::context::Context;
use crate::models::game::GameRecord;
use anyhow::{Context as _, Result};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// The delete operations an uninstall is made of.
pub trait Remover {
    fn remove_file(&mut self, path: &Path) -> io::Result<()>;
    fn remove_dir(&mut self, path: &Path) -> io::Result<()>;
}

pub struct FsRemover;

impl Remover for FsRemover {
    fn remove_file(&mut self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir(&mut self, path: &Path) -> io::Result<()> {
        fs::remove_dir(path)
    }
}

/// Deletes the game's install directory bottom-up, then its manifest.
///
/// Every path is handed to `progress` right before it is removed. The first
/// failure stops the uninstall; nothing already removed is restored, and the
/// manifest is only touched once the whole tree is gone.
pub fn uninstall(
    context: &Context,
    game: &GameRecord,
    remover: &mut dyn Remover,
    mut progress: impl FnMut(&Path),
) -> Result<()> {
    if !game.has_safe_install_dir() {
        anyhow::bail!(
            "refusing to uninstall {}: unsafe install directory {:?}",
            game,
            game.install_dir
        );
    }

    let install_path = context.full_path(game)?;
    let manifest_path = context.manifest_path(game)?;
    log::info!("removing {}", install_path.display());

    let walker = WalkDir::new(&install_path)
        .contents_first(true)
        .follow_root_links(false);
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", install_path.display()))?;
        let path = entry.path();
        progress(path);
        let removed = if entry.file_type().is_dir() {
            remover.remove_dir(path)
        } else {
            remover.remove_file(path)
        };
        removed.with_context(|| format!("Failed to remove {}", path.display()))?;
    }

    progress(&manifest_path);
    remover
        .remove_file(&manifest_path)
        .with_context(|| format!("Failed to remove manifest {}", manifest_path.display()))?;

    log::info!("uninstalled {}", game);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::index::tests::write_manifest;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Records every delete and optionally fails on one path.
    struct RecordingRemover {
        ops: Vec<PathBuf>,
        fail_on: Option<PathBuf>,
    }

    impl RecordingRemover {
        fn new(fail_on: Option<PathBuf>) -> Self {
            Self { ops: Vec::new(), fail_on }
        }

        fn check(&mut self, path: &Path) -> io::Result<()> {
            self.ops.push(path.to_path_buf());
            if self.fail_on.as_deref() == Some(path) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            Ok(())
        }
    }

    impl Remover for RecordingRemover {
        fn remove_file(&mut self, path: &Path) -> io::Result<()> {
            self.check(path)?;
            fs::remove_file(path)
        }

        fn remove_dir(&mut self, path: &Path) -> io::Result<()> {
            self.check(path)?;
            fs::remove_dir(path)
        }
    }

    struct Fixture {
        _dir: TempDir,
        context: Context,
        game: GameRecord,
        install: PathBuf,
        manifest: PathBuf,
    }

    // common/Game/{a.bin, data/{b.pak, c.pak, maps/d.bsp}}: 4 files, 3 dirs.
    fn fixture() -> Fixture {
        let dir = TempDir::new().unwrap();
        let lib = dir.path().join("steamapps");
        let install = lib.join("common").join("Game");
        fs::create_dir_all(install.join("data").join("maps")).unwrap();
        fs::write(install.join("a.bin"), "a").unwrap();
        fs::write(install.join("data").join("b.pak"), "b").unwrap();
        fs::write(install.join("data").join("c.pak"), "c").unwrap();
        fs::write(install.join("data").join("maps").join("d.bsp"), "d").unwrap();
        fs::create_dir_all(lib.join("common").join("Other")).unwrap();
        write_manifest(&lib, "42", &[("appid", "42"), ("installdir", "Game")]);

        let game = GameRecord {
            id: 42,
            name: "Game".to_string(),
            install_dir: "Game".to_string(),
            size_on_disk: "4".to_string(),
            library: 0,
        };
        let manifest = lib.join("appmanifest_42.acf");
        Fixture {
            _dir: dir,
            context: Context {
                libraries: vec![lib],
                ..Default::default()
            },
            game,
            install,
            manifest,
        }
    }

    #[test]
    fn test_removes_tree_then_manifest() {
        let f = fixture();
        let mut remover = RecordingRemover::new(None);
        let mut reported = Vec::new();

        uninstall(&f.context, &f.game, &mut remover, |p| reported.push(p.to_path_buf())).unwrap();

        assert_eq!(remover.ops.len(), 4 + 3 + 1);
        assert_eq!(remover.ops, reported);
        assert_eq!(remover.ops.last(), Some(&f.manifest));
        assert_eq!(remover.ops[remover.ops.len() - 2], f.install);

        // Every path is deleted after all of its descendants.
        for (i, path) in remover.ops.iter().enumerate() {
            for later in &remover.ops[i + 1..] {
                assert!(!later.starts_with(path) || later == path, "{:?} before {:?}", path, later);
            }
        }

        assert!(!f.install.exists());
        assert!(!f.manifest.exists());
        assert!(f.install.parent().unwrap().join("Other").exists());
    }

    #[test]
    fn test_failure_keeps_manifest() {
        let f = fixture();
        let failing = f.install.join("data").join("c.pak");
        let mut remover = RecordingRemover::new(Some(failing.clone()));

        let err = uninstall(&f.context, &f.game, &mut remover, |_| {}).unwrap_err();

        assert!(format!("{:#}", err).contains(&failing.display().to_string()));
        assert_eq!(remover.ops.last(), Some(&failing));
        assert!(!remover.ops.contains(&f.manifest));
        assert!(f.manifest.exists());
        assert!(failing.exists());
    }

    #[test]
    fn test_missing_install_dir_keeps_manifest() {
        let f = fixture();
        fs::remove_dir_all(&f.install).unwrap();
        let mut remover = RecordingRemover::new(None);

        assert!(uninstall(&f.context, &f.game, &mut remover, |_| {}).is_err());
        assert!(remover.ops.is_empty());
        assert!(f.manifest.exists());
    }

    #[test]
    fn test_missing_manifest_is_reported() {
        let f = fixture();
        fs::remove_file(&f.manifest).unwrap();

        let err = uninstall(&f.context, &f.game, &mut FsRemover, |_| {}).unwrap_err();
        assert!(format!("{:#}", err).contains("appmanifest_42.acf"));
        assert!(!f.install.exists());
    }

    #[test]
    fn test_unsafe_install_dir_is_refused() {
        let mut f = fixture();
        f.game.install_dir = String::new();
        let mut remover = RecordingRemover::new(None);

        assert!(uninstall(&f.context, &f.game, &mut remover, |_| {}).is_err());
        assert!(remover.ops.is_empty());
        assert!(f.install.exists());
    }

    #[test]
    fn test_unknown_library_is_refused() {
        let mut f = fixture();
        f.game.library = 5;
        let mut remover = RecordingRemover::new(None);

        assert!(uninstall(&f.context, &f.game, &mut remover, |_| {}).is_err());
        assert!(remover.ops.is_empty());
        assert!(f.install.exists());
        assert!(f.manifest.exists());
    }
}
