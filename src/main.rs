use clap::Parser;
use doomfire::colors::FireColor;
use doomfire::config::{Direction, FireConfig, DEFAULT_PRINT_FRAMES};
use doomfire::fire;
use doomfire::settings::Settings;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "doomfire")]
#[command(author = "Terminal Art Generator")]
#[command(version)]
#[command(about = "Doom-style fire in the terminal", long_about = None)]
struct Cli {
    /// Fire grid columns (default: terminal width)
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Fire grid rows (default: twice the terminal height)
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Cooling per step, exclusive bound (higher = shorter flames)
    #[arg(short, long)]
    decay: Option<u32>,

    /// Wind direction
    #[arg(short = 'D', long, value_enum)]
    direction: Option<Direction>,

    /// Fire color
    #[arg(short, long, value_enum)]
    color: Option<FireColor>,

    /// Animation speed (seconds per frame)
    #[arg(short, long)]
    time: Option<f32>,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print one frame to stdout (no interactive display)
    #[arg(short, long)]
    print: bool,

    /// Steps simulated before printing
    #[arg(short, long, default_value_t = DEFAULT_PRINT_FRAMES)]
    frames: u32,

    /// Write debug logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("doomfire=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = FireConfig::default();
    Settings::load().apply(&mut config);

    if cli.width.is_some() {
        config.width = cli.width;
    }
    if cli.height.is_some() {
        config.height = cli.height;
    }
    if let Some(decay) = cli.decay {
        config.decay = decay;
    }
    if let Some(direction) = cli.direction {
        config.direction = direction;
    }
    if let Some(color) = cli.color {
        config.color = color;
    }
    if let Some(time) = cli.time {
        config.time_step = time;
    }
    config.seed = cli.seed;
    config.print = cli.print;
    config.frames = cli.frames;

    fire::run(config)
}
