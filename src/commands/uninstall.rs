use crate::models::config::Config;
use crate::models::context::Context;
use crate::services::search;
use crate::services::uninstaller::{self, FsRemover};
use anyhow::Context as _;
use std::io::{self, BufRead, Write};

pub fn run(config: &Config, query: &str, yes: bool) -> anyhow::Result<()> {
    let context = Context::discover(config);
    log::debug!("{}", context);

    let Some(game) = search::find(&context, query) else {
        println!("no results found for {}", query);
        return Ok(());
    };

    println!(
        "{}\n\t{} ({})",
        context.full_path(game)?.display(),
        game.name,
        game.formatted_size()
    );

    if !yes {
        print!("uninstall? [y/n]: ");
        io::stdout().flush().context("Failed to flush stdout")?;
        if !confirm(&mut io::stdin().lock())? {
            log::info!("kept {}", game);
            return Ok(());
        }
    }

    uninstaller::uninstall(&context, game, &mut FsRemover, |path| {
        println!("{}", path.display())
    })
    .with_context(|| format!("failed to uninstall \"{}\"", game.name))
}

/// Reads one answer line; only `y` or `Y` counts as yes.
fn confirm(input: &mut impl BufRead) -> anyhow::Result<bool> {
    let mut response = String::new();
    input
        .read_line(&mut response)
        .context("Failed to read confirmation")?;
    Ok(matches!(response.trim(), "y" | "Y"))
}
