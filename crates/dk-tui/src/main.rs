//! The `delvekeep` binary.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use dk_simulation::{Game, GameConfig};
use env_logger::{Env, Target};

#[derive(Parser)]
#[command(
    name = "delvekeep",
    about = "A small roguelike set in a procedurally carved cave",
    version
)]
struct Args {
    /// RNG seed; the same seed reproduces the same cave and rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Map width in tiles
    #[arg(long)]
    width: Option<i32>,

    /// Map height in tiles
    #[arg(long)]
    height: Option<i32>,

    /// Player view distance
    #[arg(long)]
    torch_radius: Option<i32>,

    /// JSON game configuration; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write diagnostics here (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the generated map as text and exit
    #[arg(long)]
    dump_map: bool,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }

    let config = match load_config(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let game = match Game::new(config) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    if args.dump_map {
        print!("{}", dk_tui::view::ascii_map(&game));
        return;
    }

    if let Err(e) = dk_tui::terminal::run(dk_tui::app::TuiApp::new(game)) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Send `log` output to `path`. The terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<(), String> {
    let file = File::create(path)
        .map_err(|e| format!("cannot create log file {}: {e}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| format!("logger already initialized: {e}"))
}

/// Defaults, then the config file, then individual flags.
fn load_config(args: &Args) -> Result<GameConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read config {}: {e}", path.display()))?;
            serde_json::from_str::<GameConfig>(&text)
                .map_err(|e| format!("invalid config {}: {e}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.width.is_some() || args.height.is_some() {
        let width = args.width.unwrap_or(config.map_width);
        let height = args.height.unwrap_or(config.map_height);
        config = config.with_map_size(width, height);
    }
    if let Some(radius) = args.torch_radius {
        config = config.with_torch_radius(radius);
    }
    Ok(config)
}
