use crate::models::context::Context;
use crate::models::game::GameRecord;

/// Looks up a game by exact appid, falling back to a case-insensitive name
/// substring. Among several name matches the lowest appid wins.
pub fn find<'a>(context: &'a Context, query: &str) -> Option<&'a GameRecord> {
    let query = query.trim();
    if let Ok(id) = query.parse::<u32>() {
        if let Some(game) = context.games.get(&id) {
            return Some(game);
        }
    }

    let needle = query.to_lowercase();
    context
        .games
        .values()
        .find(|game| game.name.to_lowercase().contains(&needle))
}
