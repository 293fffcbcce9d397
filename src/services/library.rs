use crate::models::config::Config;
use crate::services::index::read_lossy;
use crate::utils::vdf;
use std::path::PathBuf;

/// Returns every library root, primary first, followed by the numbered
/// entries of `libraryfolders.vdf` in ascending key order.
pub fn discover(config: &Config) -> Vec<PathBuf> {
    let mut libraries = vec![config.primary_library.clone()];

    let folders_file = config.library_folders_file();
    let content = read_lossy(&folders_file);

    let mut numbered: Vec<(u64, String)> = vdf::parse_lossy(&content, &folders_file)
        .into_iter()
        .filter_map(|(key, value)| key.parse::<u64>().ok().map(|n| (n, value)))
        .collect();
    numbered.sort_by_key(|(n, _)| *n);

    for (n, value) in numbered {
        let library = PathBuf::from(value).join("steamapps");
        log::debug!("library {}: {}", n, library.display());
        libraries.push(library);
    }

    libraries
}
