use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sgu")]
#[command(about = "Uninstall a Steam game by appid or name", long_about = None)]
#[command(version = env!("SGU_BUILD_VERSION"))]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Appid, or a case-insensitive fragment of the game's name
    pub query: String,

    /// Primary steamapps directory [default: ~/.local/share/Steam/steamapps]
    #[arg(long, value_name = "DIR")]
    pub steamapps: Option<PathBuf>,

    /// Uninstall without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}
