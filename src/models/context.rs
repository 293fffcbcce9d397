use crate::models::config::Config;
use crate::models::game::GameRecord;
use crate::services::index::{self, GameIndex};
use crate::services::library;
use anyhow::Context as _;
use std::fmt::{self, Display};
use std::path::PathBuf;

/// Libraries and the games found in them, discovered once per run.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub libraries: Vec<PathBuf>,
    pub games: GameIndex,
}

impl Context {
    pub fn discover(config: &Config) -> Self {
        let libraries = library::discover(config);
        let games = index::build(&libraries);
        log::info!(
            "found {} games in {} libraries",
            games.len(),
            libraries.len()
        );
        Self { libraries, games }
    }

    pub fn full_path(&self, game: &GameRecord) -> anyhow::Result<PathBuf> {
        game.full_path(&self.libraries)
            .with_context(|| format!("{} refers to unknown library {}", game, game.library))
    }

    pub fn manifest_path(&self, game: &GameRecord) -> anyhow::Result<PathBuf> {
        game.manifest_path(&self.libraries)
            .with_context(|| format!("{} refers to unknown library {}", game, game.library))
    }
}

impl Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Context(libraries={}, games={})",
            self.libraries.len(),
            self.games.len()
        )
    }
}
